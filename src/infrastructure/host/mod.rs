//! Host channel implementations

mod json_store;
mod memory;

pub use json_store::{AppliedFilter, JsonStateStore, STATE_FILE_VERSION};
pub use memory::{HostCall, MemoryHost};
