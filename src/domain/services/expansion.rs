//! Expand/collapse state
//!
//! Expansion is independent of selection. Bulk operations report whether
//! any flag changed so callers can skip a persistence round trip.

use crate::domain::entities::{NodeId, NodeTree};

/// Expand/collapse operations for the header and row controls
pub struct Expansion;

impl Expansion {
    /// Flip one node's expand flag
    pub fn toggle(tree: &mut NodeTree, id: NodeId) {
        let node = tree.get_mut(id);
        node.is_expand = !node.is_expand;
    }

    /// Expand every branch. Returns false when all branches were already expanded.
    pub fn expand_all(tree: &mut NodeTree) -> bool {
        Self::set_branches(tree, true)
    }

    /// Collapse every branch. Returns false when nothing was expanded.
    pub fn collapse_all(tree: &mut NodeTree) -> bool {
        Self::set_branches(tree, false)
    }

    fn set_branches(tree: &mut NodeTree, expanded: bool) -> bool {
        let mut changed = false;
        for node in tree.nodes_mut().filter(|n| !n.is_leaf) {
            if node.is_expand != expanded {
                node.is_expand = expanded;
                changed = true;
            }
        }
        changed
    }

    /// Nodes currently shown: roots plus children of expanded, visible nodes, in pre-order
    pub fn visible(tree: &NodeTree) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = tree.index().roots().iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if tree.get(id).is_expand {
                stack.extend(tree.index().children_of(id).iter().rev().copied());
            }
        }
        out
    }
}
