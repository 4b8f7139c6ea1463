#![no_main]

use hierslice::{FilterBuilder, JsonNodeRepository, SelectionMachine, SelectionMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut tree) = JsonNodeRepository::parse(content) else {
        return;
    };

    // Broken parent chains must surface as errors, not panics
    let ids: Vec<_> = tree.ids().collect();
    for id in ids {
        let _ = SelectionMachine::toggle(&mut tree, id, SelectionMode::Multi);
    }
    let _ = FilterBuilder::build(&tree);
});
