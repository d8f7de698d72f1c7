//! Scoped configuration accessor.
//!
//! Translates scope-qualified requests into unscoped bulk persistence calls
//! plus a scope filter, and the inverse filter on writes.

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::persist::PersistSource;
use crate::scope::Scope;
use crate::types::{ConfigValue, Entry};

/// Key-value configuration accessor resolving reads and writes through a
/// persistence collaborator, filtered by [`Scope`].
///
/// The accessor is stateless apart from the collaborator reference: no
/// cache, no locks, no ordering between overlapping calls. Sharing it
/// across threads is safe whenever the collaborator is.
#[derive(Debug, Clone)]
pub struct ConfigStore<P> {
    source: P,
}

impl<P: PersistSource> ConfigStore<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    /// Load the value stored for `key`, whatever scope it carries.
    ///
    /// Fails with [`ConfigError::NotFound`] when the collaborator has no
    /// entry for the key.
    pub fn get_value(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        self.get_value_in(&Scope::Global, key)
    }

    /// Load the entries for `keys` verbatim; whatever subset the
    /// collaborator has is returned. Empty input yields empty output
    /// without a backend call.
    pub fn get_values(&self, keys: &[&str]) -> Result<Vec<Entry>, ConfigError> {
        self.get_values_in(&Scope::Global, keys)
    }

    /// Write a single entry as-is, no filtering.
    pub fn save_value(&self, entry: Entry) -> Result<(), ConfigError> {
        self.save_values_in(&Scope::Global, vec![entry])
    }

    /// Write a batch of entries as-is, no filtering.
    pub fn save_values(&self, entries: Vec<Entry>) -> Result<(), ConfigError> {
        self.save_values_in(&Scope::Global, entries)
    }

    /// Load the value for `key` within `scope`.
    ///
    /// Fails with [`ConfigError::NotFound`] when the key is absent or
    /// present but tagged for a different scope. Should the collaborator
    /// hold several entries for the key, the first matching one wins.
    pub fn get_value_in(&self, scope: &Scope, key: &str) -> Result<ConfigValue, ConfigError> {
        let mut matched = self.get_values_in(scope, &[key])?;
        if matched.is_empty() {
            return Err(ConfigError::NotFound {
                key: key.to_string(),
                scope: scope.clone(),
            });
        }
        Ok(matched.remove(0).value)
    }

    /// Load the entries for `keys` and retain the ones `scope` matches.
    ///
    /// Keys without a matching entry are dropped from the result, not
    /// reported as individual errors. Entries sharing a key are evaluated
    /// independently; nothing is deduplicated.
    pub fn get_values_in(&self, scope: &Scope, keys: &[&str]) -> Result<Vec<Entry>, ConfigError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        debug!(%scope, keys = keys.len(), "loading values");
        let loaded = self
            .source
            .load_values(keys)
            .map_err(|source| ConfigError::Persistence {
                scope: scope.clone(),
                source,
            })?;

        Ok(loaded
            .into_iter()
            .filter(|entry| scope.matches(&entry.value))
            .collect())
    }

    /// Write a single entry within `scope`. The entry is skipped when its
    /// tags do not match the scope.
    pub fn save_value_in(&self, scope: &Scope, entry: Entry) -> Result<(), ConfigError> {
        self.save_values_in(scope, vec![entry])
    }

    /// Write the entries whose tags match `scope`, dropping the rest
    /// before the backend call. The filtered batch is handed to the
    /// collaborator even when it is empty.
    pub fn save_values_in(&self, scope: &Scope, entries: Vec<Entry>) -> Result<(), ConfigError> {
        let (matched, dropped): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|entry| scope.matches(&entry.value));

        for entry in &dropped {
            warn!(%scope, key = %entry.key, "dropping entry not tagged for the requested scope");
        }

        debug!(%scope, entries = matched.len(), "persisting values");
        self.source
            .persist_values(&matched)
            .map_err(|source| ConfigError::Persistence {
                scope: scope.clone(),
                source,
            })
    }
}
