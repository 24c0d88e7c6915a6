use std::sync::Arc;

use super::context::SessionContext;
use super::store::MemoryStorage;
use super::token::FixedClock;
use super::*;
use crate::config::GateMode;

fn store_over(backend: MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(backend), Arc::new(AccessConfig::default()))
}

fn token(role: Role, expires_at: u64) -> SessionToken {
    SessionToken {
        role,
        subject: "investor@filmfund.io".to_owned(),
        issued_at: 100,
        expires_at,
        credential: "signed.payload".to_owned(),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(Role::User.to_string(), "user");
}

// =============================================================
// Flags
// =============================================================

#[test]
fn set_then_get_returns_true() {
    let store = store_over(MemoryStorage::new());
    store.set(Role::User).unwrap();
    assert!(store.get(Role::User));
    assert!(!store.get(Role::Admin));
}

#[test]
fn set_is_idempotent() {
    let backend = MemoryStorage::new();
    let store = store_over(backend.clone());
    store.set(Role::Admin).unwrap();
    let once = backend.get_item("adminAuth").unwrap();
    store.set(Role::Admin).unwrap();
    assert_eq!(backend.get_item("adminAuth").unwrap(), once);
    assert!(store.get(Role::Admin));
}

#[test]
fn set_writes_literal_true_under_role_key() {
    let backend = MemoryStorage::new();
    store_over(backend.clone()).set(Role::User).unwrap();
    assert_eq!(backend.get_item("userAuth").unwrap().as_deref(), Some("true"));
    assert_eq!(backend.get_item("adminAuth").unwrap(), None);
}

#[test]
fn any_value_other_than_true_is_unauthenticated() {
    for value in ["false", "1", "", "TRUE", " true", "true ", "yes"] {
        let store = store_over(MemoryStorage::with_entries([("userAuth", value)]));
        assert!(!store.get(Role::User), "value {value:?} must not authenticate");
    }
}

#[test]
fn missing_key_is_unauthenticated() {
    let store = store_over(MemoryStorage::new());
    assert!(!store.get(Role::Admin));
    assert!(!store.is_authenticated(Role::Admin));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_storage_fails_closed() {
    let store = SessionStore::new(Arc::new(store::BrowserStorage), Arc::new(AccessConfig::default()));
    assert!(!store.get(Role::User));
    assert_eq!(store.set(Role::User), Err(StorageError::Unavailable));
    assert!(!store.get(Role::User));
}

#[test]
fn clear_removes_flag_and_token() {
    let backend = MemoryStorage::new();
    let store = store_over(backend.clone());
    store.set(Role::Admin).unwrap();
    store.save_token(&token(Role::Admin, 500)).unwrap();
    store.clear(Role::Admin).unwrap();
    assert!(!store.get(Role::Admin));
    assert_eq!(store.load_token(Role::Admin), None);
    assert_eq!(backend.get_item("adminToken").unwrap(), None);
}

#[test]
fn clear_leaves_other_role_untouched() {
    let store = store_over(MemoryStorage::new());
    store.set(Role::User).unwrap();
    store.set(Role::Admin).unwrap();
    store.clear(Role::Admin).unwrap();
    assert!(store.get(Role::User));
}

// =============================================================
// Tokens
// =============================================================

#[test]
fn save_and_load_token() {
    let store = store_over(MemoryStorage::new());
    let issued = token(Role::User, 900);
    store.save_token(&issued).unwrap();
    assert_eq!(store.load_token(Role::User), Some(issued));
    assert_eq!(store.load_token(Role::Admin), None);
}

#[test]
fn malformed_token_reads_as_none() {
    let store = store_over(MemoryStorage::with_entries([("userToken", "{not json")]));
    assert_eq!(store.load_token(Role::User), None);
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn flag_mode_context_checks_flags() {
    let backend = MemoryStorage::with_entries([("userAuth", "true")]);
    let ctx = SessionContext::from_config(Arc::new(backend), AccessConfig::default(), Arc::new(FixedClock(0)));
    assert!(ctx.check().is_authenticated(Role::User));
    assert!(!ctx.check().is_authenticated(Role::Admin));
}

#[test]
fn token_mode_context_ignores_bare_flags() {
    let config = AccessConfig { mode: GateMode::Token, ..AccessConfig::default() };
    let backend = MemoryStorage::with_entries([("adminAuth", "true")]);
    let ctx = SessionContext::from_config(Arc::new(backend), config, Arc::new(FixedClock(200)));
    assert!(!ctx.check().is_authenticated(Role::Admin));

    ctx.store().save_token(&token(Role::Admin, 300)).unwrap();
    assert!(ctx.check().is_authenticated(Role::Admin));
}
