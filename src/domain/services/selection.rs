//! Selection state machine
//!
//! Mutates node selection in response to a single toggle, per selection
//! mode, and keeps the partial (indeterminate) flags consistent.
//!
//! Every lookup that can fail runs before the first flag changes, so an
//! error leaves the tree exactly as it was.

use tracing::trace;

use crate::domain::entities::{NodeId, NodeTree};
use crate::domain::value_objects::{SelectionMode, SelectionState};
use crate::error::SlicerResult;

/// Selection propagation rules
pub struct SelectionMachine;

impl SelectionMachine {
    /// Toggle one node under the given mode
    pub fn toggle(tree: &mut NodeTree, id: NodeId, mode: SelectionMode) -> SlicerResult<()> {
        match mode {
            SelectionMode::Multi => Self::toggle_multi(tree, id)?,
            SelectionMode::Single => Self::toggle_single(tree, id)?,
        }
        Self::refresh_partial(tree);
        Ok(())
    }

    /// Multi-select: flip the node, push the new state down to every
    /// descendant, and repair ancestors.
    ///
    /// Selecting back-fills every ancestor. Deselecting walks up from the
    /// parent and clears each ancestor left without a selected child,
    /// stopping at the first one that still has one. Deselecting the last
    /// selected leaf clears the whole tree.
    fn toggle_multi(tree: &mut NodeTree, id: NodeId) -> SlicerResult<()> {
        let ancestors = tree.index().ancestor_chain(id)?;
        let descendants = tree.index().descendants_of(id);

        let selecting = !tree.get(id).is_selected();
        trace!(
            node = %tree.get(id).own_id,
            selecting,
            descendants = descendants.len(),
            ancestors = ancestors.len(),
            "multi-select toggle"
        );

        tree.get_mut(id).set_selected(selecting);
        for descendant in descendants {
            if tree.get(descendant).is_selected() != selecting {
                tree.get_mut(descendant).set_selected(selecting);
            }
        }

        if selecting {
            for ancestor in ancestors {
                tree.get_mut(ancestor).set_selected(true);
            }
        } else {
            for ancestor in ancestors.into_iter().rev() {
                if Self::has_selected_child(tree, ancestor) {
                    break;
                }
                tree.get_mut(ancestor).set_selected(false);
            }
        }

        if tree.get(id).is_leaf && tree.selected_leaf_count() == 0 {
            trace!("last selected leaf removed, clearing selection");
            Self::clear(tree);
        }
        Ok(())
    }

    /// Single-select: replace the selection with the node, its whole
    /// subtree, and its ancestors; toggling a selected node clears everything.
    fn toggle_single(tree: &mut NodeTree, id: NodeId) -> SlicerResult<()> {
        let ancestors = tree.index().ancestor_chain(id)?;
        let descendants = tree.index().descendants_of(id);

        let selecting = !tree.get(id).is_selected();
        trace!(node = %tree.get(id).own_id, selecting, "single-select toggle");

        Self::clear(tree);
        if selecting {
            for node in std::iter::once(id).chain(descendants).chain(ancestors) {
                tree.get_mut(node).set_selected(true);
            }
        }
        Ok(())
    }

    /// Clear every selection flag. Returns true if anything was selected.
    pub fn clear_selection(tree: &mut NodeTree) -> bool {
        let had_selection = tree.has_selection();
        Self::clear(tree);
        had_selection
    }

    fn clear(tree: &mut NodeTree) {
        for node in tree.nodes_mut() {
            node.selection = SelectionState::Unselected;
        }
    }

    fn has_selected_child(tree: &NodeTree, id: NodeId) -> bool {
        tree.index()
            .children_of(id)
            .iter()
            .any(|&child| tree.get(child).is_selected())
    }

    /// Recompute partial flags bottom-up.
    ///
    /// A selected node is `Partial` when any child is not fully `Selected`;
    /// unselected nodes are left alone.
    pub fn refresh_partial(tree: &mut NodeTree) {
        for id in tree.index().post_order() {
            if !tree.get(id).is_selected() {
                continue;
            }
            let fully = tree
                .index()
                .children_of(id)
                .iter()
                .all(|&child| tree.get(child).selection == SelectionState::Selected);
            tree.get_mut(id).selection = if fully {
                SelectionState::Selected
            } else {
                SelectionState::Partial
            };
        }
    }
}
