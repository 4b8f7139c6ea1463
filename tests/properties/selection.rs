//! Property tests for the selection state machine.

use std::collections::BTreeSet;

use proptest::prelude::*;

use hierslice::{NodeId, NodeTree, SelectionMachine, SelectionMode, SelectionState};

use crate::strategies::arb_tree_and_toggles;

fn selected_ids(tree: &NodeTree) -> BTreeSet<NodeId> {
    tree.ids().filter(|&id| tree.get(id).is_selected()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: in multi-select mode every selected node has all ancestors selected.
    #[test]
    fn property_ancestor_back_fill((mut tree, toggles) in arb_tree_and_toggles()) {
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, SelectionMode::Multi).unwrap();

            for node_id in selected_ids(&tree) {
                for ancestor in tree.index().ancestor_chain(node_id).unwrap() {
                    prop_assert!(
                        tree.get(ancestor).is_selected(),
                        "{} selected but ancestor {} is not",
                        tree.get(node_id).own_id,
                        tree.get(ancestor).own_id
                    );
                }
            }
        }
    }

    /// PROPERTY: deselecting the last selected leaf leaves nothing selected.
    #[test]
    fn property_leaf_guard((mut tree, toggles) in arb_tree_and_toggles()) {
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, SelectionMode::Multi).unwrap();

            if tree.get(id).is_leaf && tree.selected_leaf_count() == 0 {
                prop_assert_eq!(tree.selected_count(), 0);
            }
        }
    }

    /// PROPERTY: a single-select toggle leaves exactly the node, its subtree
    /// and its ancestors selected, or nothing at all.
    #[test]
    fn property_single_select_exclusive((mut tree, toggles) in arb_tree_and_toggles()) {
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, SelectionMode::Single).unwrap();

            if tree.get(id).is_selected() {
                let mut expected: BTreeSet<NodeId> = tree.index().descendants_of(id).into_iter().collect();
                expected.extend(tree.index().ancestor_chain(id).unwrap());
                expected.insert(id);
                prop_assert_eq!(selected_ids(&tree), expected);
            } else {
                prop_assert_eq!(tree.selected_count(), 0);
            }
        }
    }

    /// PROPERTY: partial flags always match the children after any toggle.
    #[test]
    fn property_partial_flags_consistent(
        (mut tree, toggles) in arb_tree_and_toggles(),
        single in any::<bool>(),
    ) {
        let mode = SelectionMode::from_single_select(single);
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, mode).unwrap();
        }

        for id in tree.ids() {
            let node = tree.get(id);
            if !node.is_selected() {
                continue;
            }
            let fully = tree
                .index()
                .children_of(id)
                .iter()
                .all(|&child| tree.get(child).selection == SelectionState::Selected);
            prop_assert_eq!(node.is_partial(), !fully, "node {}", node.own_id);
        }
    }

    /// PROPERTY: toggling a node twice from a clean tree returns to a clean tree.
    #[test]
    fn property_double_toggle_from_clean((tree, toggles) in arb_tree_and_toggles()) {
        for id in toggles {
            let mut fresh = tree.clone();
            SelectionMachine::toggle(&mut fresh, id, SelectionMode::Multi).unwrap();
            SelectionMachine::toggle(&mut fresh, id, SelectionMode::Multi).unwrap();
            prop_assert_eq!(fresh.selected_count(), 0);
        }
    }
}
