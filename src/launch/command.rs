//! Host command construction and tab payload scripts

use std::path::PathBuf;

use crate::config::Settings;
use crate::domain::{TabSpec, WindowSpec};
use crate::error::LaunchError;

/// Suffix keeping the interactive shell alive after the command finishes.
pub const KEEPALIVE_SUFFIX: &str = "; exec $SHELL";

/// One fully-built host invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Render the invocation as one shell-quoted line for trace output.
    pub fn render(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|a| quote_if_needed(a)));
        parts.join(" ")
    }
}

/// What a tab executes: nothing (host default shell), a script on disk, or a
/// dry-run placeholder standing in for the script path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPayload {
    DefaultShell,
    Script(PathBuf),
    Placeholder(String),
}

/// Build the payload for one tab.
///
/// Non-empty commands are written to a private throwaway script so the
/// payload runs as a standalone file instead of being inlined through two
/// layers of quoting. In dry-run mode nothing touches the filesystem; the
/// payload is a deterministic placeholder describing the command.
pub fn build_payload(
    tab: &TabSpec,
    window: &WindowSpec,
    tab_index: usize,
    settings: &Settings,
) -> Result<TabPayload, LaunchError> {
    let command = if tab.command.is_empty() {
        settings.blank_command.as_str()
    } else {
        tab.command.as_str()
    };

    if command.is_empty() {
        return Ok(TabPayload::DefaultShell);
    }

    let command = with_keepalive(command);
    if settings.dry_run {
        return Ok(TabPayload::Placeholder(format!("[script:{}]", command)));
    }

    let path = write_command_script(&command, &window.uuid, tab_index)?;
    Ok(TabPayload::Script(path))
}

/// Build the invocation that creates a window with its first tab.
pub fn window_invocation(
    window: &WindowSpec,
    first_tab: &TabSpec,
    payload: &TabPayload,
    settings: &Settings,
) -> Invocation {
    let mut args = vec!["-w".to_string(), window.target.clone()];

    if let Some(pos) = window.position {
        args.push("--pos".to_string());
        args.push(format!("{},{}", pos.x, pos.y));
    }
    if let Some(size) = window.size {
        args.push("--size".to_string());
        args.push(format!("{},{}", size.cols, size.rows));
    }
    match window.launch_mode.as_str() {
        "maximized" => args.push("--maximized".to_string()),
        "fullscreen" => args.push("--fullscreen".to_string()),
        "focus" => args.push("--focus".to_string()),
        _ => {}
    }

    args.extend(tab_args(first_tab, payload, settings));
    Invocation::new(&settings.host_binary, args)
}

/// Build the invocation that attaches one more tab to an existing window.
pub fn tab_invocation(
    resolved_target: &str,
    tab: &TabSpec,
    payload: &TabPayload,
    settings: &Settings,
) -> Invocation {
    let mut args = vec!["-w".to_string(), resolved_target.to_string()];
    args.extend(tab_args(tab, payload, settings));
    Invocation::new(&settings.host_binary, args)
}

/// Tab-creation arguments shared by window creation and tab attachment.
fn tab_args(tab: &TabSpec, payload: &TabPayload, settings: &Settings) -> Vec<String> {
    let mut args = vec!["new-tab".to_string()];

    if !tab.label.is_empty() {
        args.push("--title".to_string());
        args.push(tab.label.clone());
    }
    if !tab.profile.is_empty() {
        args.push("--profile".to_string());
        args.push(tab.profile.clone());
    }
    if !tab.starting_directory.is_empty() {
        args.push("--startingDirectory".to_string());
        args.push(tab.starting_directory.clone());
    }
    if tab.focus {
        args.push("--focus".to_string());
    }

    let script = match payload {
        TabPayload::DefaultShell => return args,
        TabPayload::Script(path) => path.display().to_string(),
        TabPayload::Placeholder(text) => text.clone(),
    };

    args.push("--".to_string());
    args.push(settings.shell_host.clone());
    args.push("--exec".to_string());
    args.push(settings.shell.clone());
    args.push(script);

    args
}

/// Append the keep-alive suffix unless the command already ends with it.
pub fn with_keepalive(command: &str) -> String {
    let trimmed = command.trim_end();
    if trimmed.ends_with("exec $SHELL") {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, KEEPALIVE_SUFFIX)
    }
}

/// Write the tab command to a uniquely named, owner-executable script.
///
/// The script removes itself when the shell exits, so no cleanup pass is
/// needed and concurrent tabs never contend for the same file.
fn write_command_script(
    command: &str,
    window_uuid: &str,
    tab_index: usize,
) -> Result<PathBuf, LaunchError> {
    let path = std::env::temp_dir().join(format!("wtgrid-{}-{}.sh", window_uuid, tab_index));
    let content = format!(
        "#!/usr/bin/env bash\ntrap 'rm -f \"$0\"' EXIT\n{}\n",
        command
    );

    std::fs::write(&path, content)
        .map_err(|e| LaunchError::io(format!("failed to write {}", path.display()), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o700);
        std::fs::set_permissions(&path, perms)
            .map_err(|e| LaunchError::io(format!("failed to chmod {}", path.display()), e))?;
    }

    Ok(path)
}

fn quote_if_needed(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'') {
        format!("'{}'", arg.replace('\'', "'\\''"))
    } else {
        arg.to_string()
    }
}
