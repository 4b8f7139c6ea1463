//! Persisted property identifiers
//!
//! The host stores string-valued properties grouped under an object name.
//! Every property this slicer writes lives under the `general` object.

use std::collections::BTreeMap;

/// Identifier of a persisted host property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub object_name: &'static str,
    pub property_name: &'static str,
}

impl PropertyId {
    const fn general(property_name: &'static str) -> Self {
        Self {
            object_name: "general",
            property_name,
        }
    }

    /// Selected node keys
    pub const SELECTED: PropertyId = PropertyId::general("selected");
    /// Expanded node keys
    pub const EXPANDED: PropertyId = PropertyId::general("expanded");
    /// Host selection bookkeeping
    pub const SELECTION: PropertyId = PropertyId::general("selection");
    /// The applied filter itself
    pub const FILTER: PropertyId = PropertyId::general("filter");
    /// Display / filter values
    pub const FILTER_VALUES: PropertyId = PropertyId::general("filterValues");
    pub const DEFAULT_VALUE: PropertyId = PropertyId::general("defaultValue");
    pub const SELF_FILTER_ENABLED: PropertyId = PropertyId::general("selfFilterEnabled");
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.object_name, self.property_name)
    }
}

/// A merge-write of string properties under one object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChanges {
    pub object_name: String,
    pub properties: BTreeMap<String, String>,
}

impl PropertyChanges {
    /// Start an empty change set for an object
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property value; the property must belong to this object
    pub fn set(&mut self, id: PropertyId, value: impl Into<String>) {
        debug_assert_eq!(
            id.object_name, self.object_name,
            "property {id} written to object '{}'",
            self.object_name
        );
        self.properties
            .insert(id.property_name.to_string(), value.into());
    }

    /// Builder-style variant of [`PropertyChanges::set`]
    pub fn with(mut self, id: PropertyId, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn get(&self, id: PropertyId) -> Option<&str> {
        if id.object_name != self.object_name {
            return None;
        }
        self.properties.get(id.property_name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
