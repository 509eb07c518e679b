//! Error types for layout resolution and session launching

use thiserror::Error;

/// Errors raised while turning configuration input into a window layout.
///
/// These are always recoverable: callers fall back to the default
/// auto-tiled layout instead of aborting the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layout mapping was given without the required `windows` key.
    #[error("layout mapping has no `windows` key")]
    MissingWindows,

    /// A window entry was neither a mapping, a list of tabs, nor a command string.
    #[error("window entry {index} is not a mapping, a tab list, or a command string")]
    UnsupportedEntry { index: usize },

    /// The requested window count was malformed or out of range.
    #[error("window count must be an integer between {min} and {max}, got `{given}`")]
    InvalidCount {
        given: String,
        min: usize,
        max: usize,
    },

    /// The layout file existed but could not be parsed.
    #[error("failed to parse layout file: {0}")]
    InvalidLayout(String),

    /// The command line did not match any supported argument shape.
    #[error("unsupported arguments: {0}")]
    UnsupportedArguments(String),
}

/// Errors raised while driving the terminal host.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The host binary could not be found on PATH.
    #[error("terminal host `{0}` not found in PATH")]
    HostMissing(String),

    /// The host process exited with a non-zero status.
    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// A retryable invocation kept failing until the attempt budget ran out.
    #[error("gave up after {attempts} attempts: {last_error}")]
    TooManyAttempts { attempts: u32, last_error: String },

    /// Script file or process I/O failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Diagnostic text attached to the failure, used for retry classification.
    pub fn diagnostic(&self) -> &str {
        match self {
            Self::CommandFailed { stderr, .. } => stderr,
            _ => "",
        }
    }
}
