//! Error types for hierslice
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::HostError;

/// Result type alias for hierslice operations
pub type SlicerResult<T> = Result<T, SlicerError>;

/// Main error type for hierslice operations
#[derive(Error, Debug)]
pub enum SlicerError {
    /// A node references a parent that is not in the node list
    #[error("node '{node}' references missing parent '{parent}'")]
    BrokenChain { node: String, parent: String },

    /// Following parent links from a node came back to a node already visited
    #[error("parent chain of node '{node}' contains a cycle")]
    CyclicParent { node: String },

    /// A node's level does not match its depth below its parent
    #[error("node '{node}' is at level {found}, expected {expected}")]
    LevelMismatch {
        node: String,
        expected: usize,
        found: usize,
    },

    /// Two nodes share the same identifier
    #[error("duplicate node id '{id}'")]
    DuplicateNode { id: String },

    /// Node identifier cannot be persisted
    #[error("invalid node id '{id}': {reason}")]
    InvalidNodeId { id: String, reason: &'static str },

    /// An interaction referenced a node that does not exist
    #[error("unknown node '{id}'")]
    UnknownNode { id: String },

    /// The host persistence channel rejected a write
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl SlicerError {
    /// Whether this error means the upstream node list is inconsistent
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            SlicerError::BrokenChain { .. }
                | SlicerError::CyclicParent { .. }
                | SlicerError::LevelMismatch { .. }
                | SlicerError::DuplicateNode { .. }
                | SlicerError::InvalidNodeId { .. }
        )
    }
}
