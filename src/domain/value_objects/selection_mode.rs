//! Selection mode value object
//!
//! - `Multi`: each click toggles one node and propagates through the hierarchy
//! - `Single`: each click replaces the whole selection with one path

use serde::{Deserialize, Serialize};

/// How a toggle interacts with the rest of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Several independent paths may be selected at once
    #[default]
    Multi,
    /// Exactly one selected path at a time
    Single,
}

impl SelectionMode {
    /// Map the host's `singleSelect` setting
    pub fn from_single_select(single_select: bool) -> Self {
        if single_select {
            SelectionMode::Single
        } else {
            SelectionMode::Multi
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, SelectionMode::Single)
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMode::Multi => write!(f, "multi"),
            SelectionMode::Single => write!(f, "single"),
        }
    }
}
