//! Launch command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};

use wtgrid::config::{self, Settings};
use wtgrid::launch::{host_available, LaunchExecutor};
use wtgrid::layout::{self, LayoutSource};
use wtgrid::session::{self, SessionRecord};
use wtgrid::{LaunchError, WindowSpec};

/// How the user asked for a layout on the command line.
#[derive(Debug, Clone)]
pub enum LaunchRequest {
    /// Auto-tile, with an optional raw count argument still to validate.
    Auto(Option<String>),
    /// Explicit layout mode, with an optional file path override.
    Explicit(Option<PathBuf>),
}

/// Resolve the layout, drive the terminal host, and persist the outcome.
pub async fn launch_command(request: LaunchRequest) -> Result<()> {
    let settings = Settings::from_env();

    if !settings.dry_run && !host_available(&settings.host_binary) {
        return Err(LaunchError::HostMissing(settings.host_binary.clone()).into());
    }

    let (windows, source) = resolve_windows(request, &settings);
    println!("Launching {} window(s) ({})", windows.len(), source);

    let mut executor = LaunchExecutor::new(settings.clone());
    let mut results = Vec::with_capacity(windows.len());
    let mut failure = None;

    for (index, window) in windows.iter().enumerate() {
        match executor.launch_window(index, window) {
            Ok(result) => results.push(result),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    if settings.dry_run {
        println!();
        println!("Dry run - would invoke:");
        for invocation in executor.trace() {
            println!("  {}", invocation.render());
        }
    }

    // Record whatever was realized, even on a partial run. Dry runs leave
    // the last real session untouched.
    if !settings.dry_run && (!results.is_empty() || failure.is_none()) {
        session::persist(&SessionRecord::new(source.as_str(), windows.len(), results.clone()));
    }

    if let Some(e) = failure {
        bail!("{:#}", e);
    }

    println!("Launched {} window(s)", results.len());
    Ok(())
}

/// Turn the launch request into a window list, degrading to the default
/// auto-tiled layout on any configuration problem.
fn resolve_windows(request: LaunchRequest, settings: &Settings) -> (Vec<WindowSpec>, String) {
    match request {
        LaunchRequest::Explicit(path) => {
            let path = path.unwrap_or_else(|| settings.layout_path.clone());
            match config::load_layout_file(&path) {
                Ok(Some(raw)) => match layout::resolve(LayoutSource::Explicit(raw), settings) {
                    Ok(windows) if windows.is_empty() => {
                        tracing::warn!(
                            "layout {} contains no windows, auto-tiling instead",
                            path.display()
                        );
                        default_layout(settings)
                    }
                    Ok(windows) => (windows, format!("layout file {}", path.display())),
                    Err(e) => {
                        tracing::warn!("invalid layout {}: {}", path.display(), e);
                        default_layout(settings)
                    }
                },
                Ok(None) => {
                    tracing::warn!("layout file {} not found, auto-tiling instead", path.display());
                    default_layout(settings)
                }
                Err(e) => {
                    tracing::warn!("could not load layout {}: {}", path.display(), e);
                    default_layout(settings)
                }
            }
        }
        LaunchRequest::Auto(Some(given)) => match layout::parse_count(&given, settings) {
            Ok(count) => tiled_layout(count, settings),
            Err(e) => {
                tracing::warn!("{}", e);
                default_layout(settings)
            }
        },
        LaunchRequest::Auto(None) => default_layout(settings),
    }
}

fn default_layout(settings: &Settings) -> (Vec<WindowSpec>, String) {
    tiled_layout(settings.default_windows, settings)
}

fn tiled_layout(count: usize, settings: &Settings) -> (Vec<WindowSpec>, String) {
    match layout::resolve(LayoutSource::Count(count), settings) {
        Ok(windows) => (windows, format!("auto-tiled ({} windows)", count)),
        Err(e) => {
            // Only reachable with a count outside the supported range, which
            // the default never is.
            tracing::warn!("{}", e);
            let fallback = settings.default_windows;
            let windows = layout::resolve(LayoutSource::Count(fallback), settings)
                .unwrap_or_default();
            (windows, format!("auto-tiled ({} windows)", fallback))
        }
    }
}
