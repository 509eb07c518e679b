//! Declarative layout file loading
//!
//! Layout files are deliberately loose in shape. The document root is either
//! a mapping with a `windows` key or a bare sequence of window entries, and
//! each window entry may be a mapping, a sequence of tab entries, or a single
//! command string. All of that dynamism is classified here, once, into
//! [`RawEntry`] variants; the rest of the crate only ever sees the canonical
//! window/tab types produced by the layout resolver.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::{CellPos, CellSize};
use crate::error::ConfigError;

/// A parsed but not yet normalized layout file.
#[derive(Debug, Clone, Default)]
pub struct RawLayout {
    pub entries: Vec<RawEntry>,
}

/// One window entry, tagged by the YAML shape it was written in.
#[derive(Debug, Clone)]
pub enum RawEntry {
    /// A full window mapping.
    Mapping(RawWindow),
    /// A bare sequence of tab entries.
    Sequence(Vec<RawTab>),
    /// A single command string.
    Scalar(String),
}

/// One tab entry, tagged by shape.
#[derive(Debug, Clone)]
pub enum RawTab {
    /// A full tab mapping.
    Mapping(RawTabEntry),
    /// A bare command string.
    Command(String),
}

/// Window mapping fields with all tab entries already classified.
#[derive(Debug, Clone, Default)]
pub struct RawWindow {
    pub target: Option<String>,
    pub uuid: Option<String>,
    pub label: Option<String>,
    pub position: Option<CellPos>,
    pub size: Option<CellSize>,
    pub launch_mode: Option<String>,
    pub tabs: Vec<RawTab>,
}

/// Serde view of a window mapping, before tab classification.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawWindowFields {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    position: Option<CellPos>,
    #[serde(default)]
    size: Option<CellSize>,
    #[serde(default, alias = "launchMode")]
    launch_mode: Option<String>,
    #[serde(default)]
    tabs: Option<Vec<Value>>,
}

/// Tab mapping fields as written in the layout file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTabEntry {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default, alias = "startingDirectory")]
    pub starting_directory: Option<String>,
    #[serde(default)]
    pub focus: Option<bool>,
}

/// Load a layout file if it exists.
///
/// A missing file is not an error: it means "no layout" and the caller
/// auto-tiles instead.
pub fn load_layout_file(path: &Path) -> Result<Option<RawLayout>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::InvalidLayout(format!("{}: {}", path.display(), e)))?;

    parse_layout(&content).map(Some)
}

/// Parse layout document text into classified entries.
pub fn parse_layout(content: &str) -> Result<RawLayout, ConfigError> {
    let root: Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidLayout(e.to_string()))?;

    let window_values = match root {
        Value::Mapping(_) => match root.get("windows") {
            Some(Value::Sequence(seq)) => seq.clone(),
            Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(ConfigError::InvalidLayout(format!(
                    "`windows` must be a sequence, got {}",
                    value_kind(other)
                )))
            }
            None => return Err(ConfigError::MissingWindows),
        },
        Value::Sequence(seq) => seq,
        Value::Null => Vec::new(),
        other => {
            return Err(ConfigError::InvalidLayout(format!(
                "layout root must be a mapping or sequence, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(window_values.len());
    for (index, value) in window_values.into_iter().enumerate() {
        entries.push(classify_window(index, value)?);
    }

    Ok(RawLayout { entries })
}

fn classify_window(index: usize, value: Value) -> Result<RawEntry, ConfigError> {
    match value {
        Value::Mapping(_) => {
            let fields: RawWindowFields = serde_yaml::from_value(value)
                .map_err(|e| ConfigError::InvalidLayout(format!("window {}: {}", index, e)))?;
            let tabs = fields
                .tabs
                .unwrap_or_default()
                .into_iter()
                .map(|tab| classify_tab(index, tab))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RawEntry::Mapping(RawWindow {
                target: fields.target,
                uuid: fields.uuid,
                label: fields.label,
                position: fields.position,
                size: fields.size,
                launch_mode: fields.launch_mode,
                tabs,
            }))
        }
        Value::Sequence(seq) => {
            let tabs = seq
                .into_iter()
                .map(|tab| classify_tab(index, tab))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RawEntry::Sequence(tabs))
        }
        Value::String(command) => Ok(RawEntry::Scalar(command)),
        _ => Err(ConfigError::UnsupportedEntry { index }),
    }
}

/// Classify one tab entry of the window at `window_index`.
fn classify_tab(window_index: usize, value: Value) -> Result<RawTab, ConfigError> {
    match value {
        Value::Mapping(_) => {
            let entry: RawTabEntry = serde_yaml::from_value(value).map_err(|e| {
                ConfigError::InvalidLayout(format!("window {}: {}", window_index, e))
            })?;
            Ok(RawTab::Mapping(entry))
        }
        Value::String(command) => Ok(RawTab::Command(command)),
        _ => Err(ConfigError::UnsupportedEntry {
            index: window_index,
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
