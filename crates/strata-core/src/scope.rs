//! Scope variants and the matching rule applied on reads and writes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{App, ConfigValue, User};

/// The scope a request is qualified with.
///
/// `Global` performs no filtering. The other variants retain only entries
/// whose tags equal the requested identities; an unset tag on a candidate
/// never satisfies a non-global scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// No scope constraint: reads return the batch verbatim, writes forward
    /// every entry.
    Global,
    /// Entries tagged for this user. The app tag is not consulted.
    ForUser(User),
    /// Entries tagged for this app. The user tag is not consulted.
    ForApp(App),
    /// Entries tagged for both this app and this user.
    ForAppUser(App, User),
}

impl Scope {
    /// Whether `value` belongs to this scope.
    pub fn matches(&self, value: &ConfigValue) -> bool {
        match self {
            Scope::Global => true,
            Scope::ForUser(user) => value.user.as_ref() == Some(user),
            Scope::ForApp(app) => value.app.as_ref() == Some(app),
            Scope::ForAppUser(app, user) => {
                value.app.as_ref() == Some(app) && value.user.as_ref() == Some(user)
            }
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::ForUser(user) => write!(f, "user `{}`", user.username),
            Scope::ForApp(app) => write!(f, "app `{}`", app.appname),
            Scope::ForAppUser(app, user) => {
                write!(f, "app `{}` / user `{}`", app.appname, user.username)
            }
        }
    }
}
