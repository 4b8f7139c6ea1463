//! Scenario: a host render cycle
//!
//! Journey: the host builds the node list, restores persisted strings,
//! binds the session, and forwards clicks. The session persists after each
//! interaction through the host channel.

use hierslice::infrastructure::HostCall;
use hierslice::{
    FilterAction, Interaction, InteractionOutcome, MemoryHost, PropertyId, Settings, SlicerError,
    SlicerSession, StateSerializer,
};

use crate::common::*;

/// SCENARIO: persisted strings from one render restore the next one
#[test]
fn scenario_selection_survives_rerender() {
    let settings = Settings::default();

    // First render: user picks two cities
    let mut first = geo_tree();
    let mut host = MemoryHost::new();
    {
        let mut session = SlicerSession::new(&mut first, &settings, &mut host);
        session
            .handle(Interaction::Toggle("NL|North|Amsterdam".to_string()))
            .unwrap();
        session
            .handle(Interaction::Toggle("BE|Flanders|Gent".to_string()))
            .unwrap();
        session.handle(Interaction::ExpandAll).unwrap();
    }
    let selected = host.property(PropertyId::SELECTED).unwrap().to_string();
    let expanded = host.property(PropertyId::EXPANDED).unwrap().to_string();

    // Second render: a fresh node list restored from the persisted strings
    let mut second = geo_tree();
    StateSerializer::restore_selection(&mut second, &selected);
    StateSerializer::restore_expanded(&mut second, &expanded);

    assert_eq!(second.nodes(), first.nodes());

    let mut host = MemoryHost::new();
    let mut session = SlicerSession::new(&mut second, &settings, &mut host);
    let rebound = session.bind().unwrap().unwrap();
    assert_eq!(rebound.filter().unwrap().row_count(), 2);
}

/// SCENARIO: the clear control sends the clear action and empty strings
#[test]
fn scenario_clear_control() {
    let settings = Settings::default();
    let mut tree = geo_tree();
    let mut host = MemoryHost::new();
    let mut session = SlicerSession::new(&mut tree, &settings, &mut host);

    session
        .handle(Interaction::Toggle("NL".to_string()))
        .unwrap();
    let outcome = session.handle(Interaction::Clear).unwrap();

    assert!(matches!(
        outcome,
        InteractionOutcome::SelectionChanged(ref o) if o.is_clear()
    ));
    assert_eq!(host.property(PropertyId::SELECTED), Some(""));
    assert_eq!(host.property(PropertyId::FILTER_VALUES), Some(""));
    assert_eq!(host.last_filter(), Some((None, FilterAction::Clear)));
}

/// SCENARIO: each toggle is one merged property write followed by one filter call
#[test]
fn scenario_one_write_per_toggle() {
    let settings = Settings::default();
    let mut tree = geo_tree();
    let mut host = MemoryHost::new();
    let mut session = SlicerSession::new(&mut tree, &settings, &mut host);

    for id in ["NL|North|Amsterdam", "NL|North|Haarlem", "NL|North|Amsterdam"] {
        session.handle(Interaction::Toggle(id.to_string())).unwrap();
    }

    let calls = host.calls();
    assert_eq!(calls.len(), 6);
    for pair in calls.chunks(2) {
        assert!(matches!(pair[0], HostCall::Persist(_)));
        assert!(matches!(
            pair[1],
            HostCall::ApplyFilter { property: PropertyId::FILTER, .. }
        ));
    }
    assert_eq!(
        host.property(PropertyId::SELECTED),
        Some("NL,NL|North,NL|North|Haarlem")
    );
}

/// SCENARIO: a host that rejects writes surfaces the failure
#[test]
fn scenario_host_failure_propagates() {
    let settings = Settings::default();
    let mut tree = geo_tree();
    let mut host = MemoryHost::failing();

    let err = SlicerSession::new(&mut tree, &settings, &mut host)
        .handle(Interaction::Toggle("NL".to_string()))
        .unwrap_err();

    assert!(matches!(err, SlicerError::Host(_)));
}
