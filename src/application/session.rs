//! Slicer Session Use Case
//!
//! Orchestrates one user interaction:
//! 1. Mutate the node tree (selection or expand state)
//! 2. Rebuild the filter from the selection
//! 3. Persist key lists and hand the filter to the host
//!
//! The session borrows everything it works on; there is no hidden shared
//! state, so two sessions over two trees never interfere.

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::domain::entities::{NodeId, NodeTree};
use crate::domain::ports::SlicerHost;
use crate::domain::services::{Expansion, FilterBuilder, SelectionMachine, StateSerializer};
use crate::domain::value_objects::{FilterOutcome, PropertyId, SelectionState};
use crate::error::{SlicerError, SlicerResult};

/// A user interaction dispatched by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Click on a node's checkbox or label
    Toggle(String),
    /// Click on a node's expander
    ToggleExpand(String),
    /// Header "expand all" control
    ExpandAll,
    /// Header "collapse all" control
    CollapseAll,
    /// Header "clear" control
    Clear,
}

/// What an interaction changed
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// Nothing changed and nothing was persisted
    Ignored,
    /// Selection changed; the filter (or clear sentinel) was sent to the host
    SelectionChanged(FilterOutcome),
    /// Expand state changed and was persisted
    ExpandChanged,
}

/// Interaction handler for one render pass
pub struct SlicerSession<'a, H: SlicerHost> {
    tree: &'a mut NodeTree,
    settings: &'a Settings,
    host: &'a mut H,
    bound: bool,
}

impl<'a, H: SlicerHost> SlicerSession<'a, H> {
    pub fn new(tree: &'a mut NodeTree, settings: &'a Settings, host: &'a mut H) -> Self {
        Self {
            tree,
            settings,
            host,
            bound: false,
        }
    }

    pub fn tree(&self) -> &NodeTree {
        self.tree
    }

    /// First bind after a render: re-apply the filter for a restored selection.
    ///
    /// Returns the applied outcome, or `None` when there was nothing to apply
    /// or the session was already bound.
    pub fn bind(&mut self) -> SlicerResult<Option<FilterOutcome>> {
        if self.bound {
            return Ok(None);
        }
        self.bound = true;
        if !self.tree.has_selection() {
            return Ok(None);
        }
        debug!("restored selection found, re-applying filter");
        self.apply_filter().map(Some)
    }

    /// Handle one interaction.
    ///
    /// A data-integrity error leaves the tree as it was. A
    /// [`SlicerError::Host`] does not: the tree then holds the new state
    /// while the host may hold none of it, or only the property write if
    /// `apply_filter` was the call that failed.
    pub fn handle(&mut self, interaction: Interaction) -> SlicerResult<InteractionOutcome> {
        debug!(?interaction, "handling interaction");
        match interaction {
            Interaction::Toggle(own_id) => self.toggle(&own_id),
            Interaction::ToggleExpand(own_id) => {
                let id = self.resolve(&own_id)?;
                Expansion::toggle(self.tree, id);
                self.persist_expand()?;
                Ok(InteractionOutcome::ExpandChanged)
            }
            Interaction::ExpandAll => {
                if !Expansion::expand_all(self.tree) {
                    return Ok(InteractionOutcome::Ignored);
                }
                self.persist_expand()?;
                Ok(InteractionOutcome::ExpandChanged)
            }
            Interaction::CollapseAll => {
                if !Expansion::collapse_all(self.tree) {
                    return Ok(InteractionOutcome::Ignored);
                }
                self.persist_expand()?;
                Ok(InteractionOutcome::ExpandChanged)
            }
            Interaction::Clear => {
                SelectionMachine::clear_selection(self.tree);
                self.persist_filter(&FilterOutcome::Clear)?;
                Ok(InteractionOutcome::SelectionChanged(FilterOutcome::Clear))
            }
        }
    }

    fn toggle(&mut self, own_id: &str) -> SlicerResult<InteractionOutcome> {
        let id = self.resolve(own_id)?;
        if !self.tree.get(id).selectable {
            warn!(node = own_id, "ignoring toggle on non-selectable node");
            return Ok(InteractionOutcome::Ignored);
        }

        let before: Vec<SelectionState> = self.tree.nodes().iter().map(|n| n.selection).collect();
        SelectionMachine::toggle(self.tree, id, self.settings.selection_mode())?;

        // The filter can still hit a broken chain elsewhere in the tree
        let outcome = match FilterBuilder::build(self.tree) {
            Ok(outcome) => outcome,
            Err(e) => {
                for (node, state) in self.tree.nodes_mut().zip(before) {
                    node.selection = state;
                }
                return Err(e);
            }
        };
        self.persist_filter(&outcome)?;
        Ok(InteractionOutcome::SelectionChanged(outcome))
    }

    /// Build the filter for the current selection and persist it.
    ///
    /// A tree without nodes is left alone and reported as `Clear`.
    pub fn apply_filter(&mut self) -> SlicerResult<FilterOutcome> {
        if self.tree.is_empty() {
            debug!("no nodes, skipping filter persistence");
            return Ok(FilterOutcome::Clear);
        }
        let outcome = FilterBuilder::build(self.tree)?;
        self.persist_filter(&outcome)?;
        Ok(outcome)
    }

    fn persist_filter(&mut self, outcome: &FilterOutcome) -> SlicerResult<()> {
        let changes = StateSerializer::selection_properties(self.tree);
        self.host.persist_properties(changes)?;
        self.host
            .apply_filter(outcome.filter(), PropertyId::FILTER, outcome.action())?;
        info!(
            selected = self.tree.selected_count(),
            rows = outcome.filter().map_or(0, |f| f.row_count()),
            action = outcome.action().code(),
            "persisted filter"
        );
        Ok(())
    }

    fn persist_expand(&mut self) -> SlicerResult<()> {
        let changes = StateSerializer::expand_properties(self.tree);
        self.host.persist_properties(changes)?;
        Ok(())
    }

    fn resolve(&self, own_id: &str) -> SlicerResult<NodeId> {
        self.tree.find(own_id).ok_or_else(|| SlicerError::UnknownNode {
            id: own_id.to_string(),
        })
    }
}
