//! Application Layer
//!
//! Use cases that orchestrate the slicer flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain selection rules (those are in Domain)
//! - Coordinates between the host port and the node tree
//!
//! ## Use Cases
//!
//! - `SlicerSession` - Handles one interaction (mutate tree, rebuild filter, persist)

pub mod session;

pub use session::{Interaction, InteractionOutcome, SlicerSession};
