//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `host/` - `SlicerHost` implementations (in-memory, JSON state file)
//! - `repositories/` - Node list repository (JSON)

pub mod host;
pub mod repositories;

// Re-export for convenience
pub use host::{HostCall, JsonStateStore, MemoryHost};
pub use repositories::JsonNodeRepository;
