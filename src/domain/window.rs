//! Window and tab descriptors

use serde::{Deserialize, Serialize};

/// A window position in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub x: u32,
    pub y: u32,
}

/// A window size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub cols: u32,
    pub rows: u32,
}

/// A rectangle on the virtual screen, in pixels.
///
/// Only present on auto-tiled windows, where it records the slice of the
/// virtual canvas the window was derived from. It is never re-derived or
/// fed back into placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One requested window, with the ordered tabs to open inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Handle used to address the window in host commands. Either taken
    /// from configuration or generated as a random token.
    pub target: String,

    /// Opaque identifier for this window instance.
    pub uuid: String,

    /// Human-readable name, defaults to `target`.
    pub label: String,

    /// Explicit placement in cell coordinates, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CellPos>,

    /// Explicit size in cells, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CellSize>,

    /// Source rectangle on the virtual canvas (auto-tiled windows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_rect: Option<PixelRect>,

    /// Window launch mode flag: "maximized", "fullscreen", "focus" or empty.
    #[serde(default)]
    pub launch_mode: String,

    /// Tabs to open, in order. Never empty: a window configured without
    /// commands gets a single blank tab.
    pub tabs: Vec<TabSpec>,
}

/// One command to run inside a tab.
///
/// Normalization leaves no field unset: absent configuration values become
/// explicit empty strings, so downstream code never distinguishes "missing"
/// from "empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabSpec {
    /// Shell command to execute. Empty means the host's default shell.
    #[serde(default)]
    pub command: String,

    /// Display text for the tab. Falls back to `title` during normalization.
    #[serde(default)]
    pub label: String,

    /// Alternative display text, kept for round-tripping configurations
    /// that use `title` instead of `label`.
    #[serde(default)]
    pub title: String,

    /// Named terminal profile to open the tab with.
    #[serde(default)]
    pub profile: String,

    /// Working directory override for the tab.
    #[serde(default)]
    pub starting_directory: String,

    /// Whether the tab should receive input focus on creation.
    #[serde(default)]
    pub focus: bool,
}

impl TabSpec {
    /// Create a tab that runs a single command with all other fields empty.
    pub fn from_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }
}
