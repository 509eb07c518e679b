//! Window handle resolution from captured host output
//!
//! The host assigns window ids dynamically and only reports them as free-form
//! text, so discovery is a scrape. The scrape lives behind [`TargetParser`] so
//! a host version with different output only needs a new implementation, not
//! edits across the launch path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved target meaning "always create a fresh window".
pub const TARGET_NEW: &str = "new";
/// Reserved target meaning "the most recently used window".
pub const TARGET_LAST: &str = "last";

/// Strategy for discovering the numeric window id in captured output.
pub trait TargetParser {
    /// Scan captured stdout/stderr for the id the host assigned, if any.
    fn discover(&self, stdout: &str, stderr: &str) -> Option<String>;
}

/// Parser for `wt.exe` output.
///
/// Looks for `window <digits>` first, then falls back to the first bare
/// digit run anywhere in either stream.
#[derive(Debug, Default)]
pub struct WtOutputParser;

static WINDOW_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)window\s+(\d+)").unwrap_or_else(|e| panic!("window id pattern: {}", e))
});

static BARE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").unwrap_or_else(|e| panic!("digit pattern: {}", e)));

impl WtOutputParser {
    fn lines<'a>(stdout: &'a str, stderr: &'a str) -> impl Iterator<Item = &'a str> {
        stdout
            .lines()
            .chain(stderr.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

impl TargetParser for WtOutputParser {
    fn discover(&self, stdout: &str, stderr: &str) -> Option<String> {
        for line in Self::lines(stdout, stderr) {
            if let Some(caps) = WINDOW_ID.captures(line) {
                return Some(caps[1].to_string());
            }
        }

        for line in Self::lines(stdout, stderr) {
            if let Some(m) = BARE_DIGITS.find(line) {
                return Some(m.as_str().to_string());
            }
        }

        None
    }
}

/// Fix the concrete handle for a window from its creation output.
///
/// A discovered numeric id only replaces the requested target when that
/// target was a reserved word (`new`, `last`) or itself numeric. A named
/// target stays authoritative: the host echoes internal ids regardless of the
/// requested name, and the name is what later commands must address.
pub fn resolve_target(
    requested: &str,
    parser: &dyn TargetParser,
    stdout: &str,
    stderr: &str,
) -> String {
    let Some(discovered) = parser.discover(stdout, stderr) else {
        return requested.to_string();
    };

    let reserved = requested == TARGET_NEW || requested == TARGET_LAST;
    let numeric = !requested.is_empty() && requested.bytes().all(|b| b.is_ascii_digit());

    if reserved || numeric {
        discovered
    } else {
        requested.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_target_takes_discovered_id() {
        let resolved = resolve_target("new", &WtOutputParser, "Window 3 created\n", "");
        assert_eq!(resolved, "3");
    }

    #[test]
    fn test_named_target_is_not_overwritten() {
        let resolved = resolve_target("my-window", &WtOutputParser, "window 3\n", "");
        assert_eq!(resolved, "my-window");
    }

    #[test]
    fn test_numeric_target_is_refreshed() {
        let resolved = resolve_target("7", &WtOutputParser, "opened window 12\n", "");
        assert_eq!(resolved, "12");
    }

    #[test]
    fn test_no_token_keeps_requested() {
        let resolved = resolve_target("new", &WtOutputParser, "ok\n", "all good\n");
        assert_eq!(resolved, "new");
    }

    #[test]
    fn test_falls_back_to_bare_digits() {
        let resolved = resolve_target("last", &WtOutputParser, "", "\n  id=42 ready\n");
        assert_eq!(resolved, "42");
    }

    #[test]
    fn test_window_pattern_wins_over_earlier_digits() {
        let out = "pid 991\nspawned window 5\n";
        assert_eq!(WtOutputParser.discover(out, ""), Some("5".to_string()));
    }

    #[test]
    fn test_stderr_is_scanned_too() {
        let resolved = resolve_target("new", &WtOutputParser, "", "Window 8\n");
        assert_eq!(resolved, "8");
    }
}
