//! Configuration module for hierslice
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HIERSLICE_*)
//! 3. Explicit config file (`--config`)
//! 4. Project config (./hierslice.toml)
//! 5. User config (<config dir>/hierslice/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE, SINGLE_SELECT_ENV};
pub use types::{SelectionConfig, Settings, SlicerTextConfig};
