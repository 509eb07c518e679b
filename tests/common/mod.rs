//! Shared test utilities for git-backed repo fixtures

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates a temporary Elixir git repository with one clean commit
pub fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    init_repo(repo_path);
    temp_dir
}

/// Turns an existing directory into an Elixir git repository
pub fn init_repo(repo_path: &Path) {
    Command::new("git")
        .args(["init"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to init git repo");

    Command::new("git")
        .args(["config", "user.email", "test@test.com"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to configure git name");

    fs::write(
        repo_path.join("mix.exs"),
        "defmodule Fixture.MixProject do\nend\n",
    )
    .expect("Failed to write mix.exs");

    Command::new("git")
        .args(["add", "."])
        .current_dir(repo_path)
        .output()
        .expect("Failed to git add");

    Command::new("git")
        .args(["commit", "-m", "Initial commit"])
        .current_dir(repo_path)
        .output()
        .expect("Failed to git commit");
}
