//! JSON Node Repository
//!
//! Reads and writes the flat node list as a JSON array, using the host's
//! camelCase field names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::domain::entities::{Node, NodeTree};
use crate::domain::value_objects::{FilterTarget, SelectionState};
use crate::error::SlicerResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    own_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    parent_id: String,
    #[serde(default)]
    level: usize,
    #[serde(default, deserialize_with = "scalar_as_string")]
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<String>,
    #[serde(default)]
    is_leaf: bool,
    #[serde(default)]
    is_expand: bool,
    #[serde(default)]
    selected: bool,
    #[serde(default)]
    partial_selected: bool,
    #[serde(default)]
    filter_target: FilterTarget,
    #[serde(default)]
    order: usize,
    #[serde(default = "default_selectable")]
    selectable: bool,
}

fn default_selectable() -> bool {
    true
}

/// Accept `null` for a root's parent id
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept numeric and boolean display values; the host sends whatever the column holds
fn scalar_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
        Null(()),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null(()) => String::new(),
    })
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        Node {
            own_id: record.own_id,
            parent_id: record.parent_id,
            level: record.level,
            value: record.value,
            tooltip: record.tooltip,
            is_leaf: record.is_leaf,
            is_expand: record.is_expand,
            selection: SelectionState::from_flags(record.selected, record.partial_selected),
            filter_target: record.filter_target,
            order: record.order,
            selectable: record.selectable,
        }
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        NodeRecord {
            own_id: node.own_id.clone(),
            parent_id: node.parent_id.clone(),
            level: node.level,
            value: node.value.clone(),
            tooltip: node.tooltip.clone(),
            is_leaf: node.is_leaf,
            is_expand: node.is_expand,
            selected: node.is_selected(),
            partial_selected: node.is_partial(),
            filter_target: node.filter_target.clone(),
            order: node.order,
            selectable: node.selectable,
        }
    }
}

/// Node list stored as a JSON file
pub struct JsonNodeRepository {
    path: PathBuf,
}

impl JsonNodeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and index the node list
    pub fn load(&self) -> SlicerResult<NodeTree> {
        let content = fs::read_to_string(&self.path)?;
        let tree = Self::parse(&content)?;
        debug!(path = %self.path.display(), nodes = tree.len(), "loaded node list");
        Ok(tree)
    }

    /// Parse a JSON node array
    pub fn parse(content: &str) -> SlicerResult<NodeTree> {
        let records: Vec<NodeRecord> = serde_json::from_str(content)?;
        NodeTree::new(records.into_iter().map(Node::from).collect())
    }

    /// Render a tree back to the JSON node array
    pub fn to_json(tree: &NodeTree) -> SlicerResult<String> {
        let records: Vec<NodeRecord> = tree.nodes().iter().map(NodeRecord::from).collect();
        let mut content = serde_json::to_string_pretty(&records)?;
        content.push('\n');
        Ok(content)
    }

    pub fn save(&self, tree: &NodeTree) -> SlicerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, Self::to_json(tree)?)?;
        Ok(())
    }
}
