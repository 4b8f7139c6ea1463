//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod slicer_host;

pub use slicer_host::{HostError, HostResult, SlicerHost};
