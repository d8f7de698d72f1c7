//! Error taxonomy for accessor operations.

use thiserror::Error;

use crate::persist::PersistError;
use crate::scope::Scope;

/// Failure of a configuration operation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The persistence collaborator failed during a load or save. The
    /// backend failure is attached as the error source and is never
    /// retried here.
    #[error("persistence failure while resolving {scope} configuration")]
    Persistence {
        scope: Scope,
        #[source]
        source: PersistError,
    },

    /// A single-value read found no entry for the key within the requested
    /// scope. The backend call itself succeeded.
    #[error("no value for key `{key}` in {scope} scope")]
    NotFound { key: String, scope: Scope },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
