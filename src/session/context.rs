//! Explicit session handle shared through Leptos context.

use std::fmt;
use std::sync::Arc;

use crate::config::{AccessConfig, GateMode};

use super::store::{BrowserStorage, KeyValueStore};
use super::token::{Clock, SystemClock, TokenCheck};
use super::{RoleCheck, SessionStore};

/// Everything the gate and login flow need: a writable store, the predicate
/// the gate consults, and the routing config.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    check: Arc<dyn RoleCheck>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").field("store", &self.store).finish_non_exhaustive()
    }
}

impl SessionContext {
    pub fn new(store: SessionStore, check: Arc<dyn RoleCheck>) -> Self {
        Self { store, check }
    }

    /// Pick the flag or token predicate according to `config.mode`.
    pub fn from_config(backend: Arc<dyn KeyValueStore>, config: AccessConfig, clock: Arc<dyn Clock>) -> Self {
        let mode = config.mode;
        let store = SessionStore::new(backend, Arc::new(config));
        let check: Arc<dyn RoleCheck> = match mode {
            GateMode::Flag => Arc::new(store.clone()),
            GateMode::Token => Arc::new(TokenCheck::new(store.clone(), clock)),
        };
        Self::new(store, check)
    }

    /// `localStorage` + wall clock.
    pub fn browser(config: AccessConfig) -> Self {
        Self::from_config(Arc::new(BrowserStorage), config, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn check(&self) -> &dyn RoleCheck {
        self.check.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &AccessConfig {
        self.store.config()
    }
}
