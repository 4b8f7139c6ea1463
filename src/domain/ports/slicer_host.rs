//! SlicerHost port - abstraction over the host persistence channel
//!
//! The host stores string properties and applies filters. Both calls are
//! merge-writes; the host decides how to store them and when to re-render.

use crate::domain::value_objects::{FilterAction, PropertyChanges, PropertyId, TupleFilter};

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Host channel errors
#[derive(Debug)]
pub enum HostError {
    /// Persisted state could not be read or written
    Storage(String),
    /// Persisted state exists but is not valid
    Corrupted(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Storage(msg) => write!(f, "storage failure: {}", msg),
            HostError::Corrupted(msg) => write!(f, "corrupted state: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Persistence channel provided by the host
///
/// Implementations:
/// - `MemoryHost` - records calls in memory (tests, embedding)
/// - `JsonStateStore` - persists to a JSON state file
pub trait SlicerHost {
    /// Merge string properties into the host's persisted state
    fn persist_properties(&mut self, changes: PropertyChanges) -> HostResult<()>;

    /// Apply or clear the slicer's filter.
    ///
    /// `filter` is `None` when clearing.
    fn apply_filter(
        &mut self,
        filter: Option<&TupleFilter>,
        property: PropertyId,
        action: FilterAction,
    ) -> HostResult<()>;
}
