//! In-memory host
//!
//! Records every call it receives. Used by tests and by embedders that
//! read the persisted strings back themselves.

use std::collections::BTreeMap;

use crate::domain::ports::{HostError, HostResult, SlicerHost};
use crate::domain::value_objects::{FilterAction, PropertyChanges, PropertyId, TupleFilter};

/// One call received by a [`MemoryHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Persist(PropertyChanges),
    ApplyFilter {
        filter: Option<TupleFilter>,
        property: PropertyId,
        action: FilterAction,
    },
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    calls: Vec<HostCall>,
    properties: BTreeMap<String, BTreeMap<String, String>>,
    fail_writes: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that rejects every write
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Every call received, oldest first
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Current value of a persisted property after all merges
    pub fn property(&self, id: PropertyId) -> Option<&str> {
        self.properties
            .get(id.object_name)
            .and_then(|props| props.get(id.property_name))
            .map(String::as_str)
    }

    /// Number of `apply_filter` calls
    pub fn filters_applied(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::ApplyFilter { .. }))
            .count()
    }

    /// The most recent filter call
    pub fn last_filter(&self) -> Option<(Option<&TupleFilter>, FilterAction)> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ApplyFilter { filter, action, .. } => Some((filter.as_ref(), *action)),
            HostCall::Persist(_) => None,
        })
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check_writable(&self) -> HostResult<()> {
        if self.fail_writes {
            return Err(HostError::Storage("host rejected write".to_string()));
        }
        Ok(())
    }
}

impl SlicerHost for MemoryHost {
    fn persist_properties(&mut self, changes: PropertyChanges) -> HostResult<()> {
        self.check_writable()?;
        let object = self
            .properties
            .entry(changes.object_name.clone())
            .or_default();
        for (name, value) in &changes.properties {
            object.insert(name.clone(), value.clone());
        }
        self.calls.push(HostCall::Persist(changes));
        Ok(())
    }

    fn apply_filter(
        &mut self,
        filter: Option<&TupleFilter>,
        property: PropertyId,
        action: FilterAction,
    ) -> HostResult<()> {
        self.check_writable()?;
        self.calls.push(HostCall::ApplyFilter {
            filter: filter.cloned(),
            property,
            action,
        });
        Ok(())
    }
}
