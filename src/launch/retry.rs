//! Bounded retry for flaky host invocations

use std::time::Duration;

use crate::config::Settings;
use crate::error::LaunchError;

/// Whether a failure is worth retrying.
///
/// Only failures whose diagnostic text mentions "window" qualify: those
/// typically mean the host's window registry has not caught up with a window
/// that was created moments ago. Everything else propagates immediately.
fn is_retryable(error: &LaunchError) -> bool {
    let diagnostic = error.diagnostic();
    !diagnostic.trim().is_empty() && diagnostic.to_lowercase().contains("window")
}

/// Run `operation`, retrying retryable failures with linear backoff.
///
/// Sleeps `base_delay × attempt` between attempts. After `max_attempts`
/// retryable failures the last error is folded into
/// [`LaunchError::TooManyAttempts`].
pub fn with_retry<T, F>(settings: &Settings, mut operation: F) -> Result<T, LaunchError>
where
    F: FnMut() -> Result<T, LaunchError>,
{
    let mut last_error = String::new();

    for attempt in 1..=settings.max_attempts {
        match operation() {
            Ok(value) => return Ok(value),
            Err(error) if is_retryable(&error) => {
                tracing::debug!(attempt, %error, "retryable host failure");
                last_error = error.to_string();
                if attempt < settings.max_attempts {
                    std::thread::sleep(backoff(settings.base_delay, attempt));
                }
            }
            Err(error) => return Err(error),
        }
    }

    Err(LaunchError::TooManyAttempts {
        attempts: settings.max_attempts,
        last_error,
    })
}

fn backoff(base: Duration, attempt: u32) -> Duration {
    base * attempt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_settings() -> Settings {
        Settings {
            base_delay: Duration::from_millis(1),
            ..Settings::default()
        }
    }

    fn registry_lag() -> LaunchError {
        LaunchError::CommandFailed {
            program: "wt.exe".to_string(),
            status: "exit code 1".to_string(),
            stderr: "could not find window 3".to_string(),
        }
    }

    #[test]
    fn test_succeeds_on_third_attempt() {
        let mut attempts = 0;
        let result = with_retry(&fast_settings(), || {
            attempts += 1;
            if attempts < 3 {
                Err(registry_lag())
            } else {
                Ok("done")
            }
        });

        assert_eq!(result.unwrap(), "done");
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_non_retryable_fails_immediately() {
        let mut attempts = 0;
        let result: Result<(), _> = with_retry(&fast_settings(), || {
            attempts += 1;
            Err(LaunchError::CommandFailed {
                program: "wt.exe".to_string(),
                status: "exit code 1".to_string(),
                stderr: "access denied".to_string(),
            })
        });

        assert!(matches!(result, Err(LaunchError::CommandFailed { .. })));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_empty_diagnostic_is_not_retryable() {
        let mut attempts = 0;
        let result: Result<(), _> = with_retry(&fast_settings(), || {
            attempts += 1;
            Err(LaunchError::CommandFailed {
                program: "wt.exe".to_string(),
                status: "exit code 1".to_string(),
                stderr: "   ".to_string(),
            })
        });

        assert!(result.is_err());
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_exhaustion_yields_too_many_attempts() {
        let settings = fast_settings();
        let mut attempts = 0;
        let result: Result<(), _> = with_retry(&settings, || {
            attempts += 1;
            Err(registry_lag())
        });

        assert_eq!(attempts, settings.max_attempts);
        match result {
            Err(LaunchError::TooManyAttempts {
                attempts: reported, ..
            }) => assert_eq!(reported, settings.max_attempts),
            other => panic!("expected TooManyAttempts, got {:?}", other),
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let error = LaunchError::CommandFailed {
            program: "wt.exe".to_string(),
            status: "exit code 1".to_string(),
            stderr: "no such Window".to_string(),
        };
        assert!(is_retryable(&error));
    }
}
