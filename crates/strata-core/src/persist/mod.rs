//! Persistence port: the bulk load/save contract the accessor stores
//! through, plus the reference backends shipped with the crate.

mod file;
mod memory;

pub use file::TomlFileSource;
pub use memory::MemorySource;

use std::error::Error as StdError;

use thiserror::Error;

use crate::types::Entry;

/// Error raised by a persistence collaborator during a load or save.
///
/// Carries the backend's own failure as the error source so callers can
/// walk the full cause chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PersistError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl PersistError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Bulk load/save contract for key-tagged configuration entries.
///
/// Implementations own durability and key uniqueness; the accessor relies
/// only on the two calls below and never caches their results.
pub trait PersistSource: Send + Sync {
    /// Load the entries stored for `keys`.
    ///
    /// Returns one entry per key found and omits missing keys; a partial
    /// miss is not an error. Fails when the backend is unreachable or its
    /// contents are unreadable.
    fn load_values(&self, keys: &[&str]) -> Result<Vec<Entry>, PersistError>;

    /// Write or overwrite all of `entries`.
    ///
    /// Whether partial writes are applied on failure is backend-defined;
    /// this contract does not guarantee atomicity.
    fn persist_values(&self, entries: &[Entry]) -> Result<(), PersistError>;
}
