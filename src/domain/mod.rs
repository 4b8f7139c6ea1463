//! Domain Layer
//!
//! This is the core of hierslice - pure selection logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The flat node list and its arena (`Node`, `NodeTree`)
//! - `value_objects/` - Immutable value types (SelectionState, SelectionMode, TupleFilter)
//! - `services/` - Tree index, selection state machine, filter builder, state serializer
//! - `ports/` - Interface to the host persistence channel
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Explicit context** - Every operation receives the node tree it works on
//! 3. **Ports & Adapters** - All persistence goes through the `SlicerHost` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
