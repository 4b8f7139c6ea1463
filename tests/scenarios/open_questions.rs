//! Scenario: ancestor repair on deselect and branch-only selections
//!
//! These pin down the two behaviours that are easy to get subtly wrong:
//! what happens to ancestors when their last selected descendant goes away,
//! and what a selected branch without selected leaves contributes to the filter.

use hierslice::{
    FilterBuilder, FilterOutcome, Node, NodeTree, SelectionMachine, SelectionMode, SelectionState,
};

use crate::common::*;

fn toggle(tree: &mut NodeTree, own_id: &str) {
    let id = tree.find(own_id).unwrap();
    SelectionMachine::toggle(tree, id, SelectionMode::Multi).unwrap();
}

fn state(tree: &NodeTree, own_id: &str) -> SelectionState {
    tree.node(own_id).unwrap().selection
}

/// SCENARIO: deselecting the only selected descendant under an ancestor
/// leaves that ancestor unselected, while other subtrees keep their selection
#[test]
fn scenario_ancestor_cleared_when_last_descendant_removed() {
    let mut tree = geo_tree();

    toggle(&mut tree, "NL|North|Amsterdam");
    toggle(&mut tree, "NL|South|Maastricht");
    toggle(&mut tree, "NL|North|Amsterdam");

    assert_eq!(state(&tree, "NL|North"), SelectionState::Unselected);
    assert_eq!(state(&tree, "NL|South"), SelectionState::Selected);
    // NL still has South selected, so it stays, but only partially
    assert_eq!(state(&tree, "NL"), SelectionState::Partial);
}

/// SCENARIO: deselecting a whole branch repairs the ancestors above it
#[test]
fn scenario_deselect_branch_repairs_ancestors() {
    let mut tree = geo_tree();

    toggle(&mut tree, "NL|North");
    toggle(&mut tree, "BE|Flanders|Gent");
    toggle(&mut tree, "NL|North");

    assert_eq!(state(&tree, "NL"), SelectionState::Unselected);
    assert_eq!(state(&tree, "NL|North|Haarlem"), SelectionState::Unselected);
    assert_eq!(state(&tree, "BE"), SelectionState::Selected);
}

/// SCENARIO: deselecting a root clears its subtree and nothing else
#[test]
fn scenario_deselect_root() {
    let mut tree = geo_tree();

    toggle(&mut tree, "NL");
    toggle(&mut tree, "BE");
    toggle(&mut tree, "NL");

    let selected: Vec<&str> = tree.selected().map(|n| n.own_id.as_str()).collect();
    assert_eq!(selected, vec!["BE", "BE|Flanders", "BE|Flanders|Gent"]);
}

/// SCENARIO: a selected branch whose leaves are all unselected yields no row;
/// tuples always reach the deepest level
#[test]
fn scenario_branch_without_leaves_is_not_a_row() {
    let tree = NodeTree::new(vec![
        Node::root("NL", "NL").with_target("Geo", "Country").selected(),
        Node::child("NL|North", "NL", 1, "North")
            .with_target("Geo", "Region")
            .selected(),
        Node::child("NL|North|Amsterdam", "NL|North", 2, "Amsterdam")
            .leaf()
            .with_target("Geo", "City"),
    ])
    .unwrap();

    assert_eq!(FilterBuilder::build(&tree).unwrap(), FilterOutcome::Clear);
}

/// SCENARIO: a shallow subtree next to a deeper one does not reach the
/// deepest level, so selecting it alone produces no filter
#[test]
fn scenario_shallow_subtree_is_pinned_to_max_level() {
    let mut tree = NodeTree::new(vec![
        Node::root("NL", "NL").with_target("Geo", "Country"),
        Node::child("NL|North", "NL", 1, "North")
            .leaf()
            .with_target("Geo", "Region"),
        Node::root("BE", "BE").with_target("Geo", "Country"),
        Node::child("BE|Flanders", "BE", 1, "Flanders").with_target("Geo", "Region"),
        Node::child("BE|Flanders|Gent", "BE|Flanders", 2, "Gent")
            .leaf()
            .with_target("Geo", "City"),
    ])
    .unwrap();

    toggle(&mut tree, "NL|North");
    assert!(tree.node("NL").unwrap().is_selected());
    assert!(FilterBuilder::build(&tree).unwrap().is_clear());

    toggle(&mut tree, "BE|Flanders|Gent");
    let outcome = FilterBuilder::build(&tree).unwrap();
    assert_eq!(
        outcome.filter().unwrap().rows_as_strings(),
        vec![vec!["BE", "Flanders", "Gent"]]
    );
}
