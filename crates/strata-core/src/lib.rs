//! Strata Core Library
//!
//! Scoped key-value configuration accessor: resolves, stores, and filters
//! configuration entries along global, per-user, per-application, and
//! per-application-per-user scopes, delegating durability to a pluggable
//! persistence source.

pub mod error;
pub mod persist;
pub mod scope;
pub mod store;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Accessor
    pub use crate::store::ConfigStore;

    // Scope
    pub use crate::scope::Scope;

    // Data model
    pub use crate::types::{App, ConfigValue, Entry, User, ValueType};

    // Persistence
    pub use crate::persist::{MemorySource, PersistError, PersistSource, TomlFileSource};

    // Errors
    pub use crate::error::ConfigError;
}
