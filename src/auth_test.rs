use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::config::{AccessConfig, GateMode};
use crate::gate::{GateDecision, decide};
use crate::session::RoleCheck;
use crate::session::store::{KeyValueStore, MemoryStorage, StorageError};
use crate::session::token::FixedClock;
use crate::util::nav::MemoryHistory;

struct StubAuthenticator {
    result: Result<SessionToken, LoginError>,
}

impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, _role: Role, _credentials: &Credentials) -> Result<SessionToken, LoginError> {
        self.result.clone()
    }
}

/// Memory storage that refuses writes to keys with the given suffix.
struct RejectingStorage {
    inner: MemoryStorage,
    suffix: &'static str,
}

impl KeyValueStore for RejectingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key.ends_with(self.suffix) {
            return Err(StorageError::Backend("quota".to_owned()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

fn rejecting_context(mode: GateMode, suffix: &'static str) -> SessionContext {
    let config = AccessConfig { mode, ..AccessConfig::default() };
    let backend = RejectingStorage { inner: MemoryStorage::new(), suffix };
    SessionContext::from_config(Arc::new(backend), config, Arc::new(FixedClock(1_000)))
}

fn context(mode: GateMode, backend: MemoryStorage) -> SessionContext {
    let config = AccessConfig { mode, ..AccessConfig::default() };
    SessionContext::from_config(Arc::new(backend), config, Arc::new(FixedClock(1_000)))
}

fn token(role: Role) -> SessionToken {
    SessionToken {
        role,
        subject: "backer@filmfund.io".to_owned(),
        issued_at: 900,
        expires_at: 4_500,
        credential: "signed".to_owned(),
    }
}

fn creds() -> Credentials {
    Credentials::parse("backer@filmfund.io", "pw").unwrap()
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_are_trimmed() {
    assert_eq!(
        Credentials::parse("  a@b.io ", " secret "),
        Ok(Credentials { email: "a@b.io".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn credentials_require_both_fields_and_an_at_sign() {
    let invalid = Err(LoginError::InvalidInput(INVALID_CREDENTIALS_MESSAGE));
    assert_eq!(Credentials::parse("", "secret"), invalid);
    assert_eq!(Credentials::parse("a@b.io", "   "), invalid);
    assert_eq!(Credentials::parse("admin", "secret"), invalid);
}

// =============================================================
// complete_login
// =============================================================

#[test]
fn complete_login_sets_flag_before_landing() {
    let backend = MemoryStorage::new();
    let ctx = context(GateMode::Flag, backend.clone());
    let history = MemoryHistory::new("/login");

    complete_login(&ctx, Role::Admin, &token(Role::Admin), &history).unwrap();

    assert_eq!(backend.get_item("adminAuth").unwrap().as_deref(), Some("true"));
    assert!(ctx.store().load_token(Role::Admin).is_some());
    assert_eq!(history.current(), "/admin");
    assert_eq!(decide(ctx.check(), ctx.config(), Role::Admin), GateDecision::Render);
}

#[test]
fn complete_login_rejects_role_mismatch_without_navigating() {
    let backend = MemoryStorage::new();
    let ctx = context(GateMode::Flag, backend.clone());
    let history = MemoryHistory::new("/user/login");

    let err = complete_login(&ctx, Role::User, &token(Role::Admin), &history).unwrap_err();

    assert_eq!(err, LoginError::RoleMismatch { expected: Role::User, got: Role::Admin });
    assert_eq!(backend.get_item("userAuth").unwrap(), None);
    assert_eq!(history.current(), "/user/login");
}

#[test]
fn failed_token_write_keeps_admin_gate_closed() {
    let ctx = rejecting_context(GateMode::Flag, "Token");
    let history = MemoryHistory::new("/login");

    let err = complete_login(&ctx, Role::Admin, &token(Role::Admin), &history).unwrap_err();

    assert_eq!(err, LoginError::Storage(StorageError::Backend("quota".to_owned())));
    assert_eq!(history.current(), "/login");
    assert!(!ctx.store().get(Role::Admin));
    assert!(!decide(ctx.check(), ctx.config(), Role::Admin).is_render());
}

#[test]
fn failed_flag_write_rolls_back_token() {
    let ctx = rejecting_context(GateMode::Token, "Auth");
    let history = MemoryHistory::new("/user/login");

    let err = complete_login(&ctx, Role::User, &token(Role::User), &history).unwrap_err();

    assert!(matches!(err, LoginError::Storage(_)));
    assert_eq!(ctx.store().load_token(Role::User), None);
    assert!(!ctx.check().is_authenticated(Role::User));
    assert_eq!(history.current(), "/user/login");
}

#[test]
fn token_mode_login_grants_gate() {
    let ctx = context(GateMode::Token, MemoryStorage::new());
    let history = MemoryHistory::new("/user/login");
    complete_login(&ctx, Role::User, &token(Role::User), &history).unwrap();
    assert!(ctx.check().is_authenticated(Role::User));
    assert_eq!(history.current(), "/dashboard");
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_lands_on_home() {
    let ctx = context(GateMode::Flag, MemoryStorage::new());
    let history = MemoryHistory::new("/user/login");
    let auth = StubAuthenticator { result: Ok(token(Role::User)) };

    block_on(login(&ctx, &auth, Role::User, &creds(), &history)).unwrap();

    assert!(ctx.store().get(Role::User));
    assert_eq!(history.current(), "/dashboard");
}

#[test]
fn login_failure_leaves_session_untouched() {
    let ctx = context(GateMode::Flag, MemoryStorage::new());
    let history = MemoryHistory::new("/login");
    let auth = StubAuthenticator { result: Err(LoginError::Rejected { status: 401 }) };

    let err = block_on(login(&ctx, &auth, Role::Admin, &creds(), &history)).unwrap_err();

    assert_eq!(err, LoginError::Rejected { status: 401 });
    assert!(!ctx.store().get(Role::Admin));
    assert_eq!(history.current(), "/login");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_role_and_replaces_with_login() {
    let ctx = context(GateMode::Flag, MemoryStorage::with_entries([("adminAuth", "true"), ("userAuth", "true")]));
    let history = MemoryHistory::new("/");
    history.push("/admin");

    logout(&ctx, Role::Admin, &history);

    assert!(!ctx.store().get(Role::Admin));
    assert!(ctx.store().get(Role::User));
    assert_eq!(history.reachable(), vec!["/".to_owned(), "/login".to_owned()]);
}
