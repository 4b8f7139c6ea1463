//! Scenario: single-select mode
//!
//! Journey: a dashboard that only allows one path at a time.

use hierslice::{NodeTree, SelectionMachine, SelectionMode};

use crate::common::*;

fn toggle(tree: &mut NodeTree, own_id: &str) {
    let id = tree.find(own_id).unwrap();
    SelectionMachine::toggle(tree, id, SelectionMode::Single).unwrap();
}

fn selected(tree: &NodeTree) -> Vec<&str> {
    tree.selected().map(|n| n.own_id.as_str()).collect()
}

/// SCENARIO: toggling a region on and off again
#[test]
fn scenario_toggle_region_on_then_off() {
    let mut tree = single_chain_tree();

    toggle(&mut tree, "NL|North");
    assert_eq!(selected(&tree), vec!["NL", "NL|North", "NL|North|Amsterdam"]);

    toggle(&mut tree, "NL|North");
    assert!(selected(&tree).is_empty());
}

/// SCENARIO: picking a second path replaces the first one
#[test]
fn scenario_second_pick_replaces_first() {
    let mut tree = geo_tree();

    toggle(&mut tree, "NL|North|Amsterdam");
    toggle(&mut tree, "BE|Flanders");

    assert_eq!(selected(&tree), vec!["BE", "BE|Flanders", "BE|Flanders|Gent"]);
}

/// SCENARIO: picking a leaf inside an already selected path narrows it
#[test]
fn scenario_pick_inside_selected_path() {
    let mut tree = geo_tree();

    toggle(&mut tree, "NL");
    assert_eq!(tree.selected_count(), 6);

    // The leaf is already selected, so the toggle clears the selection
    toggle(&mut tree, "NL|North|Amsterdam");
    assert!(selected(&tree).is_empty());

    toggle(&mut tree, "NL|North|Amsterdam");
    assert_eq!(selected(&tree), vec!["NL", "NL|North", "NL|North|Amsterdam"]);
}
