//! Core domain types for wtgrid

mod result;
mod window;

pub use result::{LaunchResult, TabSummary};
pub use window::{CellPos, CellSize, PixelRect, TabSpec, WindowSpec};
