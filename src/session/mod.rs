//! Persisted per-role session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access gate only asks one question: "is this visitor authenticated as
//! `role`?" Everything here answers it from per-origin storage, failing closed
//! whenever storage is missing, unreadable, or holds anything unexpected.
//!
//! DESIGN
//! ======
//! Storage is injected (`KeyValueStore`) rather than looked up globally, so
//! the same code runs against `localStorage` in the browser and an in-memory
//! map during SSR and tests.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod context;
pub mod store;
pub mod token;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AccessConfig;
use store::{KeyValueStore, StorageError};
use token::SessionToken;

/// The only value that marks a role flag as authenticated.
pub const FLAG_TRUE: &str = "true";

/// Protected audience a route is gated on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity predicate consumed by the access gate.
pub trait RoleCheck: Send + Sync {
    fn is_authenticated(&self, role: Role) -> bool;
}

/// Role flags and tokens persisted through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    config: Arc<AccessConfig>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("config", &self.config).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, config: Arc<AccessConfig>) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Mark `role` as authenticated. Repeated calls leave the same state.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the flag could not be written.
    pub fn set(&self, role: Role) -> Result<(), StorageError> {
        self.backend
            .set_item(self.config.flag_key(role), FLAG_TRUE)
            .inspect_err(|e| leptos::logging::warn!("session flag write failed: role={role} error={e}"))
    }

    /// Whether the stored flag for `role` is exactly `"true"`.
    ///
    /// Missing keys, other values, and storage failures all read as `false`.
    #[must_use]
    pub fn get(&self, role: Role) -> bool {
        match self.backend.get_item(self.config.flag_key(role)) {
            Ok(value) => value.as_deref() == Some(FLAG_TRUE),
            Err(e) => {
                leptos::logging::warn!("session flag read failed: role={role} error={e}");
                false
            }
        }
    }

    /// Remove both the flag and any token stored for `role`.
    ///
    /// # Errors
    ///
    /// Returns the first backend error encountered; both removals are attempted.
    pub fn clear(&self, role: Role) -> Result<(), StorageError> {
        let flag = self.backend.remove_item(self.config.flag_key(role));
        let token = self.backend.remove_item(self.config.token_key(role));
        flag.and(token)
    }

    /// Persist a structured token under its role's token key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if serialization or the write fails.
    pub fn save_token(&self, token: &SessionToken) -> Result<(), StorageError> {
        let raw = serde_json::to_string(token).map_err(|e| StorageError::Backend(e.to_string()))?;
        self.backend.set_item(self.config.token_key(token.role), &raw)
    }

    /// Load the token stored for `role`. Malformed entries read as `None`.
    #[must_use]
    pub fn load_token(&self, role: Role) -> Option<SessionToken> {
        let raw = match self.backend.get_item(self.config.token_key(role)) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("session token read failed: role={role} error={e}");
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }
}

impl RoleCheck for SessionStore {
    fn is_authenticated(&self, role: Role) -> bool {
        self.get(role)
    }
}
