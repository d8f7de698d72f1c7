//! In-memory persistence source.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use super::{PersistError, PersistSource};
use crate::types::{ConfigValue, Entry};

/// Key-unique in-process store backed by a `BTreeMap`.
///
/// Writes are last-write-wins per key. Clones share the same underlying
/// map, so a single store can serve several accessors concurrently.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Arc<RwLock<BTreeMap<String, ConfigValue>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored entries in key order, for inspection from tests and
    /// tooling.
    pub fn snapshot(&self) -> Vec<Entry> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl PersistSource for MemorySource {
    fn load_values(&self, keys: &[&str]) -> Result<Vec<Entry>, PersistError> {
        let entries = self.entries.read().unwrap();
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(*key).map(|value| Entry::new(*key, value.clone())))
            .collect())
    }

    fn persist_values(&self, entries: &[Entry]) -> Result<(), PersistError> {
        let mut map = self.entries.write().unwrap();
        for entry in entries {
            map.insert(entry.key.clone(), entry.value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_omits_missing_keys() {
        let source = MemorySource::new();
        source
            .persist_values(&[Entry::new("present", ConfigValue::string("1"))])
            .unwrap();

        let loaded = source.load_values(&["present", "absent"]).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].key, "present");
    }

    #[test]
    fn test_last_write_wins_per_key() {
        let source = MemorySource::new();
        source
            .persist_values(&[Entry::new("k", ConfigValue::string("old"))])
            .unwrap();
        source
            .persist_values(&[Entry::new("k", ConfigValue::string("new"))])
            .unwrap();

        assert_eq!(source.len(), 1);
        let loaded = source.load_values(&["k"]).unwrap();
        assert_eq!(loaded[0].value.value, "new");
    }

    #[test]
    fn test_clones_share_the_same_map() {
        let source = MemorySource::new();
        let alias = source.clone();
        alias
            .persist_values(&[Entry::new("k", ConfigValue::string("1"))])
            .unwrap();

        assert_eq!(source.len(), 1);
    }

    #[test]
    fn test_empty_load_is_empty() {
        let source = MemorySource::new();
        assert!(source.load_values(&["anything"]).unwrap().is_empty());
        assert!(source.is_empty());
    }
}
