use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::launch::LaunchRequest;

#[derive(Parser)]
#[command(name = "wtgrid")]
#[command(about = "Tiled Windows Terminal session launcher for a repo fleet")]
#[command(version)]
struct Cli {
    /// Number of windows to auto-tile (2-24)
    #[arg(value_name = "COUNT")]
    count: Option<String>,

    /// Launch from the declarative layout file (defaults to ~/.wtgrid/layout.yaml)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    config: Option<Option<PathBuf>>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the parent directory for Elixir git repos and write repos.json
    Scan,

    /// Filter repos (main list minus excludes)
    Filter,

    /// Run scan + filter
    Setup,

    /// Check the filtered repos for uncommitted work
    Uncommitted,

    /// Run the analysis pass on the filtered repos
    Analyze,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A command line that fits no supported shape degrades to the default
    // auto-tiled launch instead of aborting.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit();
        }
        Err(e) => {
            init_logging(false);
            let usage = wtgrid::ConfigError::UnsupportedArguments(e.kind().to_string());
            tracing::warn!("{}, launching default layout", usage);
            return cli::launch::launch_command(LaunchRequest::Auto(None)).await;
        }
    };

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Scan) => cli::repos::scan_command().await?,
        Some(Commands::Filter) => cli::repos::filter_command().await?,
        Some(Commands::Setup) => cli::repos::setup_command().await?,
        Some(Commands::Uncommitted) => cli::repos::uncommitted_command().await?,
        Some(Commands::Analyze) => cli::repos::analyze_command().await?,
        None => {
            let request = match cli.config {
                Some(path) => LaunchRequest::Explicit(path),
                None => LaunchRequest::Auto(cli.count),
            };
            cli::launch::launch_command(request).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}
