//! Realized launch records

use serde::{Deserialize, Serialize};

use super::{CellPos, CellSize, PixelRect};

/// Summary of one launched tab, kept for the persisted session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSummary {
    pub label: String,
    pub command: String,
    pub focus: bool,
}

/// The immutable record of one launched window.
///
/// Built from a [`WindowSpec`](super::WindowSpec) once its first tab has been
/// created. `resolved_target` is the only field filled in after construction
/// begins: it holds the concrete handle discovered from the host's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResult {
    /// The handle that was requested for the window.
    pub target: String,

    /// The concrete handle the host assigned (may equal `target`).
    pub resolved_target: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<CellPos>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CellSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_rect: Option<PixelRect>,

    pub tabs: Vec<TabSummary>,
}
