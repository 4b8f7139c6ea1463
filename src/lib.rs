//! Hierslice - hierarchical slicer engine
//!
//! Hierslice keeps selection and expand state over a flat, multi-level node
//! list, propagates selections through the hierarchy, and turns the result
//! into a tuple filter (one value per level, root to leaf) for a host
//! reporting engine.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Interaction, InteractionOutcome, SlicerSession};
pub use config::Settings;
pub use domain::entities::{Node, NodeId, NodeTree};
pub use domain::ports::{HostError, SlicerHost};
pub use domain::services::{Expansion, FilterBuilder, SelectionMachine, StateSerializer, TreeIndex};
pub use domain::value_objects::{
    FilterAction, FilterOutcome, FilterTarget, FilterValue, PropertyChanges, PropertyId,
    SelectionMode, SelectionState, TupleFilter,
};
pub use error::{SlicerError, SlicerResult};
pub use infrastructure::{JsonNodeRepository, JsonStateStore, MemoryHost};
