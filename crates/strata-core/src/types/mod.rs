//! Shared core types exchanged between the accessor and the persistence
//! layer.

use serde::{Deserialize, Serialize};

/// A user a configuration value can be scoped to.
///
/// Identity is the username: two tags with the same username denote the
/// same user scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// An application a configuration value can be scoped to.
///
/// Identity is the appname, mirroring [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct App {
    pub appname: String,
}

impl App {
    pub fn new(appname: impl Into<String>) -> Self {
        Self {
            appname: appname.into(),
        }
    }
}

/// Interpretation tag stored alongside the raw value string.
///
/// The tag travels with the value but is opaque to scope resolution; the
/// accessor never parses or validates the payload against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    #[default]
    None,
    Integer,
    Double,
    String,
}

/// One stored configuration payload plus the scope it was tagged with at
/// save time.
///
/// Equality is strict and null-aware: an unset `user` or `app` tag equals
/// only an unset one. Scope compatibility is a separate question answered
/// by [`Scope::matches`](crate::scope::Scope::matches).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue {
    pub value: String,

    #[serde(default)]
    pub value_type: ValueType,

    /// User this value was written for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Application this value was written for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
}

impl ConfigValue {
    pub fn new(value: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            value: value.into(),
            value_type,
            user: None,
            app: None,
        }
    }

    /// An untagged string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value, ValueType::String)
    }

    /// An untagged value carrying an integer payload.
    pub fn integer(value: impl Into<String>) -> Self {
        Self::new(value, ValueType::Integer)
    }

    /// An untagged value carrying a double payload.
    pub fn double(value: impl Into<String>) -> Self {
        Self::new(value, ValueType::Double)
    }

    /// Tag this value for `user`.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Tag this value for `app`.
    pub fn with_app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }
}

/// A key paired with its configuration value, the unit exchanged with the
/// persistence collaborator. Batch order is insertion order and carries no
/// semantic meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: ConfigValue,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: ConfigValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
