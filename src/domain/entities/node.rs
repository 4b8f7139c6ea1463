//! Node entity - one row of the flattened hierarchy

use crate::domain::value_objects::{FilterTarget, SelectionState};

/// Stable handle of a node inside a [`NodeTree`](super::NodeTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the original node list
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node in the flattened hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Identifier, unique within the whole tree
    pub own_id: String,
    /// Identifier of the immediate parent; empty for roots
    pub parent_id: String,
    /// Zero-based depth
    pub level: usize,
    /// Display value; coerced to a number when building filters
    pub value: String,
    pub tooltip: Option<String>,
    /// True if the node has no children
    pub is_leaf: bool,
    /// Whether descendants are visible
    pub is_expand: bool,
    /// Selection flag, including the partial (indeterminate) case
    pub selection: SelectionState,
    /// Source table/column of this node's level
    pub filter_target: FilterTarget,
    /// Render order; irrelevant to selection
    pub order: usize,
    /// Clicks on non-selectable nodes are ignored
    pub selectable: bool,
}

impl Node {
    /// Create a root node
    pub fn root(own_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::child(own_id, String::new(), 0, value)
    }

    /// Create a node below `parent_id` at `level`
    pub fn child(
        own_id: impl Into<String>,
        parent_id: impl Into<String>,
        level: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            own_id: own_id.into(),
            parent_id: parent_id.into(),
            level,
            value: value.into(),
            tooltip: None,
            is_leaf: false,
            is_expand: false,
            selection: SelectionState::Unselected,
            filter_target: FilterTarget::default(),
            order: 0,
            selectable: true,
        }
    }

    /// Mark as leaf
    pub fn leaf(mut self) -> Self {
        self.is_leaf = true;
        self
    }

    /// Set the source table/column
    pub fn with_target(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.filter_target = FilterTarget::new(table, column);
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn expanded(mut self) -> Self {
        self.is_expand = true;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selection = SelectionState::Selected;
        self
    }

    pub fn not_selectable(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Check if this node has no parent
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// The node's own selection flag
    pub fn is_selected(&self) -> bool {
        self.selection.is_selected()
    }

    pub fn is_partial(&self) -> bool {
        self.selection.is_partial()
    }

    /// Set or clear the selection flag. Setting keeps an existing partial state.
    pub fn set_selected(&mut self, selected: bool) {
        self.selection = match (selected, self.selection) {
            (false, _) => SelectionState::Unselected,
            (true, SelectionState::Unselected) => SelectionState::Selected,
            (true, state) => state,
        };
    }
}
