//! Node arena
//!
//! Owns the flat node list for one render pass together with the index
//! built over it. Nodes are addressed by [`NodeId`]; the list is never
//! grown or shrunk after construction.

use super::node::{Node, NodeId};
use crate::domain::services::TreeIndex;
use crate::error::SlicerResult;

/// The flat node list plus its adjacency index
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
    index: TreeIndex,
}

impl NodeTree {
    /// Build a tree from a flat node list, validating ids once
    pub fn new(nodes: Vec<Node>) -> SlicerResult<Self> {
        let index = TreeIndex::build(&nodes)?;
        Ok(Self { nodes, index })
    }

    /// A tree with no nodes (rendered without data)
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            index: TreeIndex::default(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    /// Node by handle
    ///
    /// Panics if the handle came from a different tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Look up a handle by the node's `own_id`
    pub fn find(&self, own_id: &str) -> Option<NodeId> {
        self.index.by_id(own_id)
    }

    /// Look up a node by its `own_id`
    pub fn node(&self, own_id: &str) -> Option<&Node> {
        self.find(own_id).map(|id| self.get(id))
    }

    /// All handles in node-list order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Nodes whose own selection flag is set, in node-list order
    pub fn selected(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_selected())
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Count of selected leaf nodes
    pub fn selected_leaf_count(&self) -> usize {
        self.selected().filter(|n| n.is_leaf).count()
    }

    /// Whether any node is selected
    pub fn has_selection(&self) -> bool {
        self.nodes.iter().any(|n| n.is_selected())
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::empty()
    }
}
