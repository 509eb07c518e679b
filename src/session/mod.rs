//! Persisted session state
//!
//! After a launch run the realized layout is written to a single JSON file
//! under the user's state directory. Persisting is best-effort: a run that
//! opened its windows is a success even if the record cannot be written, so
//! failures only produce warnings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::domain::LaunchResult;

/// The record written after every (possibly partial) launch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// ISO-8601 timestamp of when the record was generated.
    pub generated_at: String,

    /// Human-readable description of where the layout came from.
    pub source: String,

    /// Number of windows the layout asked for.
    pub window_count: usize,

    /// Realized windows, in launch order.
    pub windows: Vec<LaunchResult>,
}

impl SessionRecord {
    pub fn new(source: impl Into<String>, window_count: usize, windows: Vec<LaunchResult>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: source.into(),
            window_count,
            windows,
        }
    }
}

/// Write the session record to the default state path, warning on failure.
pub fn persist(record: &SessionRecord) {
    let path = config::session_path();
    if let Err(e) = save(record, &path) {
        tracing::warn!("failed to persist session state: {:#}", e);
    }
}

/// Write the session record to an explicit path.
pub fn save(record: &SessionRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let content =
        serde_json::to_string_pretty(record).context("failed to serialize session record")?;

    fs::write(path, content)
        .with_context(|| format!("failed to write session record to {}", path.display()))?;

    Ok(())
}

/// Load a previously persisted session record.
pub fn load(path: &Path) -> Result<SessionRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read session record from {}", path.display()))?;

    serde_json::from_str(&content).context("failed to parse session record JSON")
}
