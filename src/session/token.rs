//! Structured, expiring session tokens.
//!
//! ARCHITECTURE
//! ============
//! The login endpoint issues a signed credential along with its claims. The
//! client keeps the claims to answer gate checks locally (role + expiry) and
//! forwards `credential` to the issuing authority, which alone verifies the
//! signature.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Role, RoleCheck, SessionStore};

/// Claims plus the opaque signed credential returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub role: Role,
    pub subject: String,
    /// Unix seconds.
    pub issued_at: u64,
    /// Unix seconds, exclusive.
    pub expires_at: u64,
    pub credential: String,
}

impl SessionToken {
    /// Whether this token authenticates `role` at `now` (unix seconds).
    #[must_use]
    pub fn is_valid_for(&self, role: Role, now: u64) -> bool {
        self.role == role && !self.credential.is_empty() && self.issued_at <= now && now < self.expires_at
    }

    /// Seconds left before expiry, or zero once expired.
    #[must_use]
    pub fn remaining_secs(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }
}

/// Wall-clock source in unix seconds.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_secs(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            (js_sys::Date::now() / 1000.0) as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs())
        }
    }
}

/// Clock pinned to a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_secs(&self) -> u64 {
        self.0
    }
}

/// Role check backed by stored tokens instead of literal flags.
#[derive(Clone)]
pub struct TokenCheck {
    store: SessionStore,
    clock: Arc<dyn Clock>,
}

impl TokenCheck {
    pub fn new(store: SessionStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl RoleCheck for TokenCheck {
    fn is_authenticated(&self, role: Role) -> bool {
        self.store
            .load_token(role)
            .is_some_and(|token| token.is_valid_for(role, self.clock.now_secs()))
    }
}
