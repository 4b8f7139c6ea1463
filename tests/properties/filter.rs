//! Property tests for the filter builder.

use proptest::prelude::*;

use hierslice::{FilterBuilder, FilterOutcome, SelectionMachine, SelectionMode};

use crate::strategies::{arb_tree, arb_tree_and_toggles};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an empty selection always yields the clear sentinel.
    #[test]
    fn property_empty_selection_is_clear(tree in arb_tree()) {
        prop_assert_eq!(FilterBuilder::build(&tree).unwrap(), FilterOutcome::Clear);
    }

    /// PROPERTY: an applied filter is never an empty `In` list, and every
    /// tuple reaches the deepest level.
    #[test]
    fn property_tuples_have_full_arity(
        (mut tree, toggles) in arb_tree_and_toggles(),
        single in any::<bool>(),
    ) {
        let mode = SelectionMode::from_single_select(single);
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, mode).unwrap();
        }

        let max_level = tree.index().max_level().unwrap();
        match FilterBuilder::build(&tree).unwrap() {
            FilterOutcome::Apply(filter) => {
                prop_assert!(filter.row_count() > 0);
                prop_assert!(!filter.target.is_empty());
                for row in &filter.values {
                    prop_assert_eq!(row.len(), max_level + 1);
                }
            }
            FilterOutcome::Clear => {
                let deepest_selected = tree
                    .selected()
                    .any(|n| n.level == max_level);
                prop_assert!(!deepest_selected);
            }
        }
    }

    /// PROPERTY: building twice on an unchanged tree gives equal filters.
    #[test]
    fn property_build_is_idempotent((mut tree, toggles) in arb_tree_and_toggles()) {
        for id in toggles {
            SelectionMachine::toggle(&mut tree, id, SelectionMode::Multi).unwrap();
        }

        let first = FilterBuilder::build(&tree).unwrap();
        let second = FilterBuilder::build(&tree).unwrap();
        prop_assert_eq!(first, second);
    }
}
