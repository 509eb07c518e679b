//! Uncommitted-work check across the repo fleet

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::process::Command;

/// How long a single `git status` query may take.
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Check whether a repository has uncommitted changes.
///
/// A query that fails or times out is reported as a warning and treated as
/// clean, so one broken checkout does not abort the sweep.
pub async fn has_uncommitted_changes(repo: &Path) -> bool {
    match query_status(repo).await {
        Ok(dirty) => dirty,
        Err(e) => {
            tracing::warn!("failed to check {}: {:#}", repo.display(), e);
            false
        }
    }
}

async fn query_status(repo: &Path) -> Result<bool> {
    let output = tokio::time::timeout(
        STATUS_TIMEOUT,
        Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(repo)
            .output(),
    )
    .await
    .context("git status timed out")?
    .context("failed to run git status")?;

    if !output.status.success() {
        bail!(
            "git status exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_is_treated_as_clean() {
        let dirty = has_uncommitted_changes(Path::new("/nonexistent/repo/path")).await;
        assert!(!dirty);
    }
}
