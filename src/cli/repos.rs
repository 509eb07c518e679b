//! Repo fleet command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wtgrid::repos::{self, status, RepoList, EXCLUDES_FILE, FILTERED_FILE, REPOS_FILE};

/// Scan the parent directory for Elixir git repositories and write the
/// full list. The exclude list is seeded empty on first run and never
/// overwritten, so hand-edits survive rescans.
pub async fn scan_command() -> Result<()> {
    let parent = Path::new("..")
        .canonicalize()
        .context("failed to resolve parent directory")?;

    let found = repos::scan_repos(&parent)?;
    RepoList::new(found.clone()).save(Path::new(REPOS_FILE))?;

    println!("Found {} Elixir git repositories", found.len());
    println!("Written to {}", REPOS_FILE);

    let excludes_path = PathBuf::from(EXCLUDES_FILE);
    if !excludes_path.exists() {
        RepoList::default().save(&excludes_path)?;
        println!("Created empty {}", EXCLUDES_FILE);
    }

    Ok(())
}

/// Subtract the exclude list from the main list and persist the result.
pub async fn filter_command() -> Result<()> {
    let main = load_or_report(Path::new(REPOS_FILE), "scan");
    let excludes = load_or_report(Path::new(EXCLUDES_FILE), "scan");

    let filtered = repos::subtract(&main, &excludes);
    RepoList::new(filtered.clone()).save(Path::new(FILTERED_FILE))?;

    println!("Filtered repos: {}", filtered.len());
    for repo in &filtered {
        println!("  - {}", repo);
    }

    Ok(())
}

/// Scan then filter.
pub async fn setup_command() -> Result<()> {
    println!("=== Scanning for Elixir repos ===");
    scan_command().await?;
    println!();
    println!("=== Filtering repos ===");
    filter_command().await
}

/// Check every filtered repo for uncommitted work.
pub async fn uncommitted_command() -> Result<()> {
    let repos = filtered_repos()?;
    let mut dirty = Vec::new();

    for repo in &repos {
        let path = Path::new(repo);
        let name = repo_name(path);
        if status::has_uncommitted_changes(path).await {
            println!("x {} - has uncommitted changes", name);
            dirty.push(repo.clone());
        } else {
            println!("+ {} - clean", name);
        }
    }

    println!();
    if dirty.is_empty() {
        println!("All repos are clean!");
    } else {
        println!("Repos with uncommitted work ({}):", dirty.len());
        for repo in &dirty {
            println!("  - {}", repo);
        }
    }

    Ok(())
}

/// Stub analysis pass over the filtered repos.
pub async fn analyze_command() -> Result<()> {
    let repos = filtered_repos()?;

    println!("Running analysis...");
    for repo in &repos {
        println!("  Processing: {}", repo_name(Path::new(repo)));
        // TODO: per-repo analysis (mix credo / dialyzer sweep)
    }

    Ok(())
}

fn filtered_repos() -> Result<Vec<String>> {
    let path = Path::new(FILTERED_FILE);
    if !path.exists() {
        anyhow::bail!("{} not found. Run `wtgrid setup` first.", FILTERED_FILE);
    }
    Ok(RepoList::load(path)?.repos)
}

fn load_or_report(path: &Path, needed_command: &str) -> Vec<String> {
    match RepoList::load(path) {
        Ok(list) => list.repos,
        Err(e) => {
            println!(
                "{} could not be read ({}). Run `wtgrid {}` first.",
                path.display(),
                e,
                needed_command
            );
            Vec::new()
        }
    }
}

fn repo_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
