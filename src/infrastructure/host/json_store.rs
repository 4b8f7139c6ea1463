//! JSON State Store
//!
//! Persists slicer properties and the last applied filter to a JSON file,
//! standing in for the host's own property storage between CLI runs.
//!
//! Every write re-reads the file under an exclusive lock, merges, and
//! replaces the file atomically.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::ports::{HostError, HostResult, SlicerHost};
use crate::domain::value_objects::{FilterAction, PropertyChanges, PropertyId, TupleFilter};

/// Format version written to new state files
pub const STATE_FILE_VERSION: u32 = 1;

/// The last filter handed to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    /// `object.property` the filter was stored under
    pub property: String,
    /// Host action code (0 apply, 1 clear)
    pub action: u8,
    #[serde(default)]
    pub filter: Option<TupleFilter>,
}

impl AppliedFilter {
    pub fn action(&self) -> Option<FilterAction> {
        FilterAction::from_code(self.action)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateFile {
    version: u32,
    #[serde(default)]
    properties: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filter: Option<AppliedFilter>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_FILE_VERSION,
            properties: BTreeMap::new(),
            filter: None,
        }
    }
}

/// File-backed [`SlicerHost`]
#[derive(Debug)]
pub struct JsonStateStore {
    path: PathBuf,
    state: StateFile,
}

impl JsonStateStore {
    /// Open a state file. A missing file is an empty state.
    pub fn open(path: impl Into<PathBuf>) -> HostResult<Self> {
        let path = path.into();
        let state = load_from_disk(&path)?;
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value of a persisted property as of the last read or write
    pub fn property(&self, id: PropertyId) -> Option<&str> {
        self.state
            .properties
            .get(id.object_name)
            .and_then(|props| props.get(id.property_name))
            .map(String::as_str)
    }

    /// Persisted selected keys; empty when never written
    pub fn selected_keys(&self) -> &str {
        self.property(PropertyId::SELECTED).unwrap_or_default()
    }

    /// Persisted expanded keys; empty when never written
    pub fn expanded_keys(&self) -> &str {
        self.property(PropertyId::EXPANDED).unwrap_or_default()
    }

    pub fn applied_filter(&self) -> Option<&AppliedFilter> {
        self.state.filter.as_ref()
    }

    /// Sibling lock file taken on every write. It is never removed, so a
    /// concurrent writer always locks the same inode.
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn update(&mut self, apply: impl FnOnce(&mut StateFile)) -> HostResult<()> {
        let lock_path = self.lock_path();
        fs::create_dir_all(parent_dir(&lock_path)).map_err(storage)?;

        let lock_file = fs::File::create(&lock_path).map_err(storage)?;
        lock_file.lock_exclusive().map_err(storage)?;

        let result = load_from_disk(&self.path).and_then(|mut state| {
            apply(&mut state);
            save_to_disk(&self.path, &state)?;
            Ok(state)
        });

        let _ = lock_file.unlock();
        self.state = result?;
        Ok(())
    }
}

impl SlicerHost for JsonStateStore {
    fn persist_properties(&mut self, changes: PropertyChanges) -> HostResult<()> {
        debug!(
            path = %self.path.display(),
            object = %changes.object_name,
            count = changes.properties.len(),
            "persisting properties"
        );
        self.update(|state| {
            state
                .properties
                .entry(changes.object_name)
                .or_default()
                .extend(changes.properties);
        })
    }

    fn apply_filter(
        &mut self,
        filter: Option<&TupleFilter>,
        property: PropertyId,
        action: FilterAction,
    ) -> HostResult<()> {
        let record = AppliedFilter {
            property: property.to_string(),
            action: action.code(),
            filter: filter.cloned(),
        };
        self.update(|state| state.filter = Some(record))
    }
}

fn load_from_disk(path: &Path) -> HostResult<StateFile> {
    if !path.exists() {
        return Ok(StateFile::default());
    }

    let content = fs::read_to_string(path).map_err(storage)?;
    if content.trim().is_empty() {
        return Ok(StateFile::default());
    }

    let state: StateFile = serde_json::from_str(&content)
        .map_err(|e| HostError::Corrupted(format!("{}: {}", path.display(), e)))?;

    if state.version != STATE_FILE_VERSION {
        return Err(HostError::Corrupted(format!(
            "{}: unsupported state file version {} (expected {})",
            path.display(),
            state.version,
            STATE_FILE_VERSION
        )));
    }

    Ok(state)
}

fn save_to_disk(path: &Path, state: &StateFile) -> HostResult<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(storage)?;

    let mut content = serde_json::to_string_pretty(state).map_err(storage)?;
    content.push('\n');

    let mut tmp = NamedTempFile::new_in(dir).map_err(storage)?;
    tmp.write_all(content.as_bytes()).map_err(storage)?;
    tmp.persist(path).map_err(|e| storage(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn storage(e: impl std::fmt::Display) -> HostError {
    HostError::Storage(e.to_string())
}
