//! wtgrid - tiled Windows Terminal session launcher
//!
//! wtgrid opens a multi-window, multi-tab Windows Terminal session from WSL
//! in one shot. It computes a tiled screen layout (or reads a declarative
//! one), drives `wt.exe` once per window and tab, scrapes the host's output
//! for the window handles it assigned, retries transient registry lag, and
//! records the realized layout on disk. It also carries the small fleet
//! helpers the sessions are usually opened for: scanning sibling Elixir
//! repositories and checking them for uncommitted work.

pub mod config;
pub mod domain;
pub mod error;
pub mod launch;
pub mod layout;
pub mod repos;
pub mod session;

pub use domain::*;
pub use error::{ConfigError, LaunchError};
