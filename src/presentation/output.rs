//! Output Rendering
//!
//! Text and JSON renderings of the node tree and of filter outcomes.
//! Functions return strings; the binary decides where they go.

use serde_json::{json, Value};

use crate::domain::entities::{Node, NodeTree};
use crate::domain::services::{Expansion, StateSerializer};
use crate::domain::value_objects::{FilterOutcome, SelectionState};
use crate::error::SlicerResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub mod icons {
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

/// Render the visible part of the tree, one node per line
pub fn render_tree(tree: &NodeTree) -> String {
    let mut out = String::new();
    for id in Expansion::visible(tree) {
        out.push_str(&render_tree_node(tree.get(id)));
        out.push('\n');
    }
    out
}

fn render_tree_node(node: &Node) -> String {
    let indent = "  ".repeat(node.level);

    let state_icon = match node.selection {
        SelectionState::Selected => icons::SELECTED,
        SelectionState::Partial => icons::PARTIAL,
        SelectionState::Unselected => icons::UNSELECTED,
    };

    // Expansion icon (only for branches)
    let expand_icon = if node.is_leaf {
        "  ".to_string()
    } else if node.is_expand {
        format!("{} ", icons::EXPAND)
    } else {
        format!("{} ", icons::COLLAPSE)
    };

    format!("{}{}{} {}", indent, expand_icon, state_icon, node.value)
}

/// One-line selection summary
pub fn render_status_line(tree: &NodeTree) -> String {
    format!(
        "Selected: {}/{} nodes ({} leaves)",
        tree.selected_count(),
        tree.len(),
        tree.selected_leaf_count()
    )
}

/// The filter as pretty JSON, or `no filter` for the clear sentinel
pub fn render_filter(outcome: &FilterOutcome) -> SlicerResult<String> {
    match outcome.filter() {
        Some(filter) => Ok(serde_json::to_string_pretty(filter)?),
        None => Ok("no filter".to_string()),
    }
}

fn state_name(state: SelectionState) -> &'static str {
    match state {
        SelectionState::Selected => "selected",
        SelectionState::Partial => "partial",
        SelectionState::Unselected => "unselected",
    }
}

/// JSON envelope for commands that end with a filter
pub fn filter_json(command: &str, tree: &NodeTree, outcome: &FilterOutcome) -> Value {
    json!({
        "command": command,
        "action": outcome.action().code(),
        "selected": StateSerializer::selected_keys(tree),
        "filter": outcome.filter(),
    })
}

/// JSON envelope for commands that change expand state
pub fn expand_json(command: &str, tree: &NodeTree, changed: bool) -> Value {
    json!({
        "command": command,
        "changed": changed,
        "expanded": StateSerializer::expanded(tree),
    })
}

/// JSON listing of the visible tree
pub fn tree_json(tree: &NodeTree) -> Value {
    let nodes: Vec<Value> = Expansion::visible(tree)
        .into_iter()
        .map(|id| {
            let node = tree.get(id);
            json!({
                "ownId": node.own_id,
                "level": node.level,
                "value": node.value,
                "state": state_name(node.selection),
                "isLeaf": node.is_leaf,
                "isExpand": node.is_expand,
            })
        })
        .collect();

    json!({
        "command": "show",
        "selected": tree.selected_count(),
        "total": tree.len(),
        "nodes": nodes,
    })
}
