//! TOML-file-backed persistence source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PersistError, PersistSource};
use crate::types::{ConfigValue, Entry};

/// Document layout of the backing file: one `[values.<key>]` table per
/// stored entry.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    values: BTreeMap<String, ConfigValue>,
}

/// Persistence source that keeps all entries in a single TOML file.
///
/// A missing file reads as an empty store. Saving merges the given entries
/// over the entries already on disk, then rewrites the whole document, so
/// keys are unique within one file.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory, e.g.
    /// `~/.config/<dir>/values.toml` on Linux.
    pub fn in_config_dir(dir: &str) -> Result<Self, PersistError> {
        let base = dirs::config_dir()
            .ok_or_else(|| PersistError::new("could not determine config directory"))?;
        Ok(Self::new(base.join(dir).join("values.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> anyhow::Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))
    }

    fn write_document(&self, document: &StoreDocument) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(document)
            .context("Failed to serialize store document to TOML")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write store file: {}", self.path.display()))?;
        Ok(())
    }
}

impl PersistSource for TomlFileSource {
    fn load_values(&self, keys: &[&str]) -> Result<Vec<Entry>, PersistError> {
        let document = self
            .read_document()
            .map_err(|e| PersistError::with_source("failed to load entries", e))?;

        debug!(path = %self.path.display(), keys = keys.len(), "loaded store document");
        Ok(keys
            .iter()
            .filter_map(|key| {
                document
                    .values
                    .get(*key)
                    .map(|value| Entry::new(*key, value.clone()))
            })
            .collect())
    }

    fn persist_values(&self, entries: &[Entry]) -> Result<(), PersistError> {
        let mut document = self
            .read_document()
            .map_err(|e| PersistError::with_source("failed to load entries before save", e))?;

        for entry in entries {
            document.values.insert(entry.key.clone(), entry.value.clone());
        }
        self.write_document(&document)
            .map_err(|e| PersistError::with_source("failed to persist entries", e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "persisted entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use std::error::Error as _;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let source = TomlFileSource::new(dir.path().join("values.toml"));

        assert!(source.load_values(&["anything"]).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let source = TomlFileSource::new(dir.path().join("values.toml"));

        let entry = Entry::new(
            "theme",
            ConfigValue::string("dark").with_user(User::new("alice")),
        );
        source.persist_values(std::slice::from_ref(&entry)).unwrap();

        let loaded = source.load_values(&["theme"]).unwrap();
        assert_eq!(loaded, vec![entry]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let source = TomlFileSource::new(dir.path().join("nested/deeper/values.toml"));

        source
            .persist_values(&[Entry::new("k", ConfigValue::string("1"))])
            .unwrap();

        assert!(source.path().exists());
    }

    #[test]
    fn test_save_merges_over_existing_keys() {
        let dir = tempdir().unwrap();
        let source = TomlFileSource::new(dir.path().join("values.toml"));

        source
            .persist_values(&[
                Entry::new("keep", ConfigValue::string("stay")),
                Entry::new("replace", ConfigValue::string("old")),
            ])
            .unwrap();
        source
            .persist_values(&[Entry::new("replace", ConfigValue::string("new"))])
            .unwrap();

        let loaded = source.load_values(&["keep", "replace"]).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].value.value, "new");
    }

    #[test]
    fn test_corrupt_file_surfaces_cause() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("values.toml");
        std::fs::write(&path, "values = [unclosed").unwrap();

        let source = TomlFileSource::new(&path);
        let err = source.load_values(&["k"]).unwrap_err();

        assert_eq!(err.to_string(), "failed to load entries");
        assert!(err.source().is_some());
    }
}
