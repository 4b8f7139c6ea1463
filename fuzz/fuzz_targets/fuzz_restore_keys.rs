#![no_main]

use hierslice::{FilterBuilder, Node, NodeTree, StateSerializer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(keys) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut tree) = NodeTree::new(vec![
        Node::root("a", "a").with_target("T", "L0"),
        Node::child("a|b", "a", 1, "b").leaf().with_target("T", "L1"),
        Node::child("a|c", "a", 1, "c").leaf().with_target("T", "L1"),
    ]) else {
        return;
    };

    StateSerializer::restore_selection(&mut tree, keys);
    StateSerializer::restore_expanded(&mut tree, keys);
    let _ = FilterBuilder::build(&tree);
});
