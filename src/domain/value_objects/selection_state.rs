//! Selection state of a single node

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    /// Not selected (○)
    #[default]
    Unselected,
    /// Selected together with all of its children (●)
    Selected,
    /// Selected, but some children are not (◐)
    Partial,
}

impl SelectionState {
    /// Build a state from the host's `selected` / `partialSelected` flag pair
    pub fn from_flags(selected: bool, partial: bool) -> Self {
        match (selected, partial) {
            (false, _) => SelectionState::Unselected,
            (true, false) => SelectionState::Selected,
            (true, true) => SelectionState::Partial,
        }
    }

    /// The node's own selection flag; partial nodes count as selected
    pub fn is_selected(&self) -> bool {
        !matches!(self, SelectionState::Unselected)
    }

    /// Whether the checkbox should render indeterminate
    pub fn is_partial(&self) -> bool {
        matches!(self, SelectionState::Partial)
    }
}
