//! Repository fleet lists: scan, exclude, filter
//!
//! The fleet is tracked as three JSON files in the working directory:
//! `repos.json` (everything the scan found), `repos_exclude.json` (entries to
//! leave alone), and `repos_filtered.json` (the set subtraction the actions
//! operate on).

pub mod status;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File holding every repository the scan found.
pub const REPOS_FILE: &str = "repos.json";
/// File holding repositories excluded from actions.
pub const EXCLUDES_FILE: &str = "repos_exclude.json";
/// File holding the filtered working set.
pub const FILTERED_FILE: &str = "repos_filtered.json";

/// A persisted list of repository paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoList {
    #[serde(default)]
    pub repos: Vec<String>,
}

impl RepoList {
    pub fn new(repos: Vec<String>) -> Self {
        Self { repos }
    }

    /// Load a repo list from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Save the list as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .with_context(|| format!("failed to serialize {}", path.display()))?;

        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}

/// Scan every directory under `parent` for Elixir git repositories.
///
/// A hit must be both a git repository (`.git/` present) and an Elixir
/// project (`mix.exs` present). Results are sorted for stable output.
pub fn scan_repos(parent: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(parent)
        .with_context(|| format!("failed to read directory {}", parent.display()))?;

    let mut repos = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", parent.display()))?;
        let path = entry.path();
        if path.is_dir() && is_git_repo(&path) && is_elixir_repo(&path) {
            repos.push(path.display().to_string());
        }
    }

    repos.sort();
    Ok(repos)
}

/// Repositories in `main` that are not in `excludes`, original order kept.
pub fn subtract(main: &[String], excludes: &[String]) -> Vec<String> {
    main.iter()
        .filter(|repo| !excludes.contains(repo))
        .cloned()
        .collect()
}

fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

fn is_elixir_repo(path: &Path) -> bool {
    path.join("mix.exs").exists()
}
