//! Sequential launch of windows and tabs through the terminal host
//!
//! Launching is strictly ordered: a window's first tab creates the window,
//! the host's output is scraped for the handle it assigned, and only then are
//! the remaining tabs attached one by one against that handle. Creation is
//! never retried (a retry could open a duplicate window); attachment is
//! retried with bounded linear backoff because the host's window registry can
//! lag behind a window created a moment earlier.
//!
//! In dry-run mode no process is spawned and no script file is written; every
//! invocation is recorded in an inspectable trace instead.

pub mod command;
pub mod retry;
pub mod target;

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::domain::{LaunchResult, TabSummary, WindowSpec};
use crate::error::LaunchError;

pub use command::{Invocation, TabPayload};
pub use target::{TargetParser, WtOutputParser};

/// Captured output of one host invocation.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Check that a binary can be found on PATH.
pub fn host_available(binary: &str) -> bool {
    std::process::Command::new("which")
        .arg(binary)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Drives the terminal host, one window at a time.
pub struct LaunchExecutor {
    settings: Settings,
    parser: Box<dyn TargetParser>,
    trace: Vec<Invocation>,
}

impl LaunchExecutor {
    pub fn new(settings: Settings) -> Self {
        Self::with_parser(settings, Box::new(WtOutputParser))
    }

    /// Create an executor with a custom output-parsing strategy.
    pub fn with_parser(settings: Settings, parser: Box<dyn TargetParser>) -> Self {
        Self {
            settings,
            parser,
            trace: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Invocations recorded so far (populated in dry-run mode).
    pub fn trace(&self) -> &[Invocation] {
        &self.trace
    }

    /// Launch one window: create it via its first tab, resolve the assigned
    /// handle, then attach the remaining tabs to that handle.
    ///
    /// `index` is the zero-based position of the window in the layout and is
    /// only used for diagnostics.
    pub fn launch_window(&mut self, index: usize, window: &WindowSpec) -> Result<LaunchResult> {
        let settings = self.settings.clone();
        let (first_tab, remaining) = window
            .tabs
            .split_first()
            .with_context(|| format!("window {} ({}) has no tabs", index + 1, window.label))?;

        let payload = command::build_payload(first_tab, window, 0, &settings)
            .with_context(|| format!("window {} ({})", index + 1, window.label))?;
        let invocation = command::window_invocation(window, first_tab, &payload, &settings);
        let output = self.invoke(&invocation).with_context(|| {
            format!("window {} ({}): failed to create window", index + 1, window.label)
        })?;

        let resolved = target::resolve_target(
            &window.target,
            self.parser.as_ref(),
            &output.stdout,
            &output.stderr,
        );
        if resolved != window.target {
            tracing::debug!(
                requested = %window.target,
                resolved = %resolved,
                "host assigned a numeric window handle"
            );
        }

        for (offset, tab) in remaining.iter().enumerate() {
            let tab_index = offset + 1;
            let payload = command::build_payload(tab, window, tab_index, &settings)
                .with_context(|| format!("window {} tab {}", index + 1, tab_index + 1))?;
            let invocation = command::tab_invocation(&resolved, tab, &payload, &settings);

            retry::with_retry(&settings, || self.invoke(&invocation)).with_context(|| {
                format!(
                    "window {} tab {}: failed to attach to window `{}`",
                    index + 1,
                    tab_index + 1,
                    resolved
                )
            })?;
        }

        Ok(LaunchResult {
            target: window.target.clone(),
            resolved_target: resolved,
            label: window.label.clone(),
            position: window.position,
            size: window.size,
            pixel_rect: window.pixel_rect,
            tabs: window
                .tabs
                .iter()
                .map(|tab| TabSummary {
                    label: tab.label.clone(),
                    command: tab.command.clone(),
                    focus: tab.focus,
                })
                .collect(),
        })
    }

    /// Run one host invocation synchronously and capture its output.
    fn invoke(&mut self, invocation: &Invocation) -> Result<CapturedOutput, LaunchError> {
        if self.settings.dry_run {
            tracing::debug!(invocation = %invocation.render(), "dry-run invocation");
            self.trace.push(invocation.clone());
            return Ok(CapturedOutput::default());
        }

        let output = std::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| LaunchError::io(format!("failed to spawn {}", invocation.program), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(LaunchError::CommandFailed {
                program: invocation.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CapturedOutput { stdout, stderr })
    }
}
