//! Layout resolution: turn configuration or a window count into window specs

pub mod tiler;

use uuid::Uuid;

use crate::config::{RawEntry, RawLayout, RawTab, RawTabEntry, RawWindow, Settings};
use crate::domain::{CellPos, CellSize, PixelRect, TabSpec, WindowSpec};
use crate::error::ConfigError;

/// Where the window layout comes from.
#[derive(Debug, Clone)]
pub enum LayoutSource {
    /// A declarative layout file, already parsed into raw entries.
    Explicit(RawLayout),
    /// Auto-tiling with a requested window count.
    Count(usize),
}

/// Resolve a layout source into an ordered window list.
///
/// An explicit layout that resolves to zero windows returns an empty list;
/// the caller treats that as "no layout" and auto-tiles instead.
pub fn resolve(source: LayoutSource, settings: &Settings) -> Result<Vec<WindowSpec>, ConfigError> {
    match source {
        LayoutSource::Explicit(layout) => resolve_explicit(layout),
        LayoutSource::Count(count) => resolve_tiled(count, settings),
    }
}

/// Validate and parse a requested window count from command-line text.
pub fn parse_count(given: &str, settings: &Settings) -> Result<usize, ConfigError> {
    let invalid = || ConfigError::InvalidCount {
        given: given.to_string(),
        min: 2,
        max: settings.max_windows,
    };

    let count: usize = given.trim().parse().map_err(|_| invalid())?;
    if count < 2 || count > settings.max_windows {
        return Err(invalid());
    }
    Ok(count)
}

fn resolve_explicit(layout: RawLayout) -> Result<Vec<WindowSpec>, ConfigError> {
    layout.entries.into_iter().map(normalize_window).collect()
}

fn resolve_tiled(count: usize, settings: &Settings) -> Result<Vec<WindowSpec>, ConfigError> {
    let rects = tiler::tile(count, settings)?;

    Ok(rects
        .into_iter()
        .map(|rect| {
            let target = generate_target();
            WindowSpec {
                uuid: Uuid::new_v4().to_string(),
                label: target.clone(),
                target,
                position: Some(CellPos {
                    x: (rect.x as f64 / settings.px_per_col()).round() as u32,
                    y: (rect.y as f64 / settings.px_per_row()).round() as u32,
                }),
                size: Some(CellSize {
                    cols: rect.cols,
                    rows: rect.rows,
                }),
                pixel_rect: Some(PixelRect {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                }),
                launch_mode: String::new(),
                tabs: vec![TabSpec::default()],
            }
        })
        .collect())
}

fn normalize_window(entry: RawEntry) -> Result<WindowSpec, ConfigError> {
    let raw = match entry {
        RawEntry::Mapping(window) => window,
        RawEntry::Sequence(tabs) => RawWindow {
            tabs,
            ..RawWindow::default()
        },
        RawEntry::Scalar(command) => RawWindow {
            tabs: vec![RawTab::Command(command)],
            ..RawWindow::default()
        },
    };

    let target = raw.target.unwrap_or_else(generate_target);
    let uuid = raw.uuid.unwrap_or_else(|| Uuid::new_v4().to_string());
    let label = raw.label.unwrap_or_else(|| target.clone());

    let mut tabs: Vec<TabSpec> = raw.tabs.into_iter().map(normalize_tab).collect();
    if tabs.is_empty() {
        tabs.push(TabSpec::default());
    }

    Ok(WindowSpec {
        target,
        uuid,
        label,
        position: raw.position,
        size: raw.size,
        pixel_rect: None,
        launch_mode: raw.launch_mode.unwrap_or_default(),
        tabs,
    })
}

fn normalize_tab(raw: RawTab) -> TabSpec {
    match raw {
        RawTab::Command(command) => TabSpec::from_command(command),
        RawTab::Mapping(entry) => {
            let RawTabEntry {
                command,
                label,
                title,
                profile,
                starting_directory,
                focus,
            } = entry;

            let title = title.unwrap_or_default();
            let label = label.unwrap_or_else(|| title.clone());

            TabSpec {
                command: command.unwrap_or_default(),
                label,
                title,
                profile: profile.unwrap_or_default(),
                starting_directory: starting_directory.unwrap_or_default(),
                focus: focus.unwrap_or(false),
            }
        }
    }
}

fn generate_target() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("w-{}", &token[..8])
}
