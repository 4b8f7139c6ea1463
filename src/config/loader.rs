//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{SlicerError, SlicerResult};

use super::types::Settings;

/// Project-level settings file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "hierslice.toml";

/// Environment override for `selection.single_select`
pub const SINGLE_SELECT_ENV: &str = "HIERSLICE_SINGLE_SELECT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SlicerResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SlicerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Settings {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("hierslice").join("config.toml")));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((settings, warnings)) => {
                for w in &warnings {
                    warn!("{}", w);
                }
                debug!(path = %candidate.display(), "loaded settings");
                return with_env_overrides(settings);
            }
            Err(e) => warn!("ignoring {}: {}", candidate.display(), e),
        }
    }

    with_env_overrides(Settings::default())
}

/// Apply environment variable overrides (HIERSLICE_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub(crate) fn apply_overrides(
    mut settings: Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(value) = lookup(SINGLE_SELECT_ENV) {
        match parse_bool(&value) {
            Some(single) => settings.selection.single_select = single,
            None => warn!("ignoring {}={:?}: expected true or false", SINGLE_SELECT_ENV, value),
        }
    }
    settings
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 1-based line of the first occurrence of `needle`
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Known key within two edits of `unknown`, closest first
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "selection",
        "single_select",
        "slicer_text",
        "font_color",
        "hover_color",
        "selected_color",
    ];

    KNOWN_KEYS
        .iter()
        .map(|&key| (key, edit_distance(unknown, key)))
        .filter(|&(_, dist)| dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(key, _)| key.to_string())
}

/// Byte-wise Levenshtein distance with a single rolling row
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
