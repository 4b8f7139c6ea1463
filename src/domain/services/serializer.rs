//! State serializer
//!
//! Encodes selection and expand state as comma-joined id lists for the
//! host's persisted properties, and parses them back onto a freshly built
//! node tree.

use std::collections::HashSet;

use tracing::debug;

use super::selection::SelectionMachine;
use super::tree_index::KEY_SEPARATOR;
use crate::domain::entities::{Node, NodeTree};
use crate::domain::value_objects::{PropertyChanges, PropertyId, SelectionState};

/// Encoding and restoring of persisted key lists
pub struct StateSerializer;

impl StateSerializer {
    /// Ids of all selected nodes, in node-list order
    pub fn filter_values(tree: &NodeTree) -> String {
        Self::join(tree.selected())
    }

    /// Selected keys. Same content as [`filter_values`](Self::filter_values),
    /// stored under its own property.
    pub fn selected_keys(tree: &NodeTree) -> String {
        Self::join(tree.selected())
    }

    /// Ids of all expanded nodes, in node-list order
    pub fn expanded(tree: &NodeTree) -> String {
        Self::join(tree.nodes().iter().filter(|n| n.is_expand))
    }

    /// Merge-write persisting the selection
    pub fn selection_properties(tree: &NodeTree) -> PropertyChanges {
        PropertyChanges::new(PropertyId::FILTER_VALUES.object_name)
            .with(PropertyId::FILTER_VALUES, Self::filter_values(tree))
            .with(PropertyId::SELECTED, Self::selected_keys(tree))
    }

    /// Merge-write persisting the expand state
    pub fn expand_properties(tree: &NodeTree) -> PropertyChanges {
        PropertyChanges::new(PropertyId::EXPANDED.object_name)
            .with(PropertyId::EXPANDED, Self::expanded(tree))
    }

    /// Restore selection flags from a persisted key list.
    ///
    /// Nodes not listed are unselected; unknown keys are skipped.
    pub fn restore_selection(tree: &mut NodeTree, keys: &str) {
        let keys = Self::split(tree, keys);
        for node in tree.nodes_mut() {
            node.selection = if keys.contains(node.own_id.as_str()) {
                SelectionState::Selected
            } else {
                SelectionState::Unselected
            };
        }
        SelectionMachine::refresh_partial(tree);
    }

    /// Restore expand flags from a persisted key list
    pub fn restore_expanded(tree: &mut NodeTree, keys: &str) {
        let keys = Self::split(tree, keys);
        for node in tree.nodes_mut() {
            node.is_expand = keys.contains(node.own_id.as_str());
        }
    }

    fn join<'a>(nodes: impl Iterator<Item = &'a Node>) -> String {
        nodes
            .map(|n| n.own_id.as_str())
            .collect::<Vec<_>>()
            .join(&KEY_SEPARATOR.to_string())
    }

    fn split(tree: &NodeTree, keys: &str) -> HashSet<String> {
        keys.split(KEY_SEPARATOR)
            .filter(|key| !key.is_empty())
            .filter(|key| {
                let known = tree.find(key).is_some();
                if !known {
                    debug!(key, "ignoring persisted key for unknown node");
                }
                known
            })
            .map(str::to_string)
            .collect()
    }
}
