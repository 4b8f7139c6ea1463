//! Settings type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SelectionMode;
use crate::error::SlicerResult;

use super::loader::{self, ConfigWarning};

/// Selection behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    /// One selected path at a time instead of independent toggles
    #[serde(default)]
    pub single_select: bool,
}

/// Item text colors. Presentation only; the engine never reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlicerTextConfig {
    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_hover_color")]
    pub hover_color: String,

    #[serde(default = "default_selected_color")]
    pub selected_color: String,
}

impl Default for SlicerTextConfig {
    fn default() -> Self {
        Self {
            font_color: default_font_color(),
            hover_color: default_hover_color(),
            selected_color: default_selected_color(),
        }
    }
}

fn default_font_color() -> String {
    "#666666".to_string()
}

fn default_hover_color() -> String {
    "#212121".to_string()
}

fn default_selected_color() -> String {
    "#2196F3".to_string()
}

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub slicer_text: SlicerTextConfig,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> SlicerResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SlicerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (HIERSLICE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Selection mode the engine should run in
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_single_select(self.selection.single_select)
    }
}
