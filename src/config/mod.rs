//! Launch configuration: geometry constants, retry limits, environment overrides

mod layout;

pub use layout::{load_layout_file, parse_layout, RawEntry, RawLayout, RawTab, RawTabEntry, RawWindow};

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the declarative layout file.
pub const ENV_LAYOUT: &str = "WTGRID_LAYOUT";
/// Environment variable enabling dry-run mode.
pub const ENV_DRY_RUN: &str = "WTGRID_DRY_RUN";
/// Environment variable overriding the nested shell host.
pub const ENV_SHELL_HOST: &str = "WTGRID_SHELL_HOST";
/// Environment variable overriding the nested shell.
pub const ENV_SHELL: &str = "WTGRID_SHELL";
/// Environment variable selecting a command for blank tabs.
pub const ENV_BLANK_COMMAND: &str = "WTGRID_BLANK_COMMAND";

/// Immutable launch settings.
///
/// Everything that shapes tiling, retries, and host invocation lives here and
/// is passed down explicitly; nothing reads ambient globals at use sites.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Virtual canvas width in pixels.
    pub canvas_width: u32,
    /// Virtual canvas height in pixels.
    pub canvas_height: u32,
    /// Terminal columns a full-canvas window would have.
    pub ref_cols: u32,
    /// Terminal rows a full-canvas window would have.
    pub ref_rows: u32,
    /// Smallest column count any tiled window may be assigned.
    pub min_cols: u32,
    /// Smallest row count any tiled window may be assigned.
    pub min_rows: u32,
    /// Largest supported auto-tile window count.
    pub max_windows: usize,
    /// Window count used when none is requested.
    pub default_windows: usize,
    /// Attempt budget for retryable host invocations.
    pub max_attempts: u32,
    /// Base delay for linear retry backoff.
    pub base_delay: Duration,
    /// Terminal host binary, resolved via PATH.
    pub host_binary: String,
    /// Host program that runs the nested shell (e.g. `wsl.exe`).
    pub shell_host: String,
    /// Shell executed inside the shell host.
    pub shell: String,
    /// Command used for blank tabs instead of the host default shell.
    pub blank_command: String,
    /// When set, no process is spawned and no script file is written.
    pub dry_run: bool,
    /// Path of the declarative layout file.
    pub layout_path: PathBuf,
}

impl Settings {
    /// Build settings from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(path) = std::env::var(ENV_LAYOUT) {
            if !path.trim().is_empty() {
                settings.layout_path = PathBuf::from(path);
            }
        }
        if let Ok(host) = std::env::var(ENV_SHELL_HOST) {
            if !host.trim().is_empty() {
                settings.shell_host = host;
            }
        }
        if let Ok(shell) = std::env::var(ENV_SHELL) {
            if !shell.trim().is_empty() {
                settings.shell = shell;
            }
        }
        if let Ok(command) = std::env::var(ENV_BLANK_COMMAND) {
            settings.blank_command = command;
        }
        settings.dry_run = std::env::var(ENV_DRY_RUN)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        settings
    }

    /// Pixels per terminal column on the virtual canvas.
    pub fn px_per_col(&self) -> f64 {
        self.canvas_width as f64 / self.ref_cols as f64
    }

    /// Pixels per terminal row on the virtual canvas.
    pub fn px_per_row(&self) -> f64 {
        self.canvas_height as f64 / self.ref_rows as f64
    }

    /// Canvas aspect ratio (width over height).
    pub fn aspect_ratio(&self) -> f64 {
        self.canvas_width as f64 / self.canvas_height as f64
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            ref_cols: default_ref_cols(),
            ref_rows: default_ref_rows(),
            min_cols: default_min_cols(),
            min_rows: default_min_rows(),
            max_windows: default_max_windows(),
            default_windows: default_window_count(),
            max_attempts: default_max_attempts(),
            base_delay: default_base_delay(),
            host_binary: default_host_binary(),
            shell_host: default_shell_host(),
            shell: default_shell(),
            blank_command: String::new(),
            dry_run: false,
            layout_path: default_layout_path(),
        }
    }
}

fn default_canvas_width() -> u32 {
    3840
}

fn default_canvas_height() -> u32 {
    2160
}

fn default_ref_cols() -> u32 {
    384
}

fn default_ref_rows() -> u32 {
    108
}

fn default_min_cols() -> u32 {
    20
}

fn default_min_rows() -> u32 {
    6
}

fn default_max_windows() -> usize {
    24
}

fn default_window_count() -> usize {
    4
}

fn default_max_attempts() -> u32 {
    8
}

fn default_base_delay() -> Duration {
    Duration::from_millis(500)
}

fn default_host_binary() -> String {
    "wt.exe".to_string()
}

fn default_shell_host() -> String {
    "wsl.exe".to_string()
}

fn default_shell() -> String {
    "bash".to_string()
}

/// Get the state directory path (~/.wtgrid/)
pub fn state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wtgrid")
}

/// Default path of the declarative layout file (~/.wtgrid/layout.yaml)
pub fn default_layout_path() -> PathBuf {
    state_dir().join("layout.yaml")
}

/// Path of the persisted session record (~/.wtgrid/session.json)
pub fn session_path() -> PathBuf {
    state_dir().join("session.json")
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
