//! Login and logout flow.
//!
//! ARCHITECTURE
//! ============
//! Credentials are never compared locally. An [`Authenticator`] hands them to
//! the identity service, and on success the returned token is written to the
//! session store *before* navigating to the protected landing page, so the
//! gate on that page sees the new session on its first render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::Role;
use crate::session::context::SessionContext;
use crate::session::store::StorageError;
use crate::session::token::SessionToken;
use crate::util::nav::Redirector;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Enter a valid email and password.";

/// Errors produced by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("login rejected: status {status}")]
    Rejected { status: u16 },
    #[error("login request failed: {0}")]
    Transport(String),
    #[error("login response malformed: {0}")]
    Malformed(String),
    #[error("token issued for {got}, expected {expected}")]
    RoleMismatch { expected: Role, got: Role },
    #[error("login is only available in the browser")]
    Unavailable,
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
}

/// Email + password pair submitted from a login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trim and validate raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidInput`] if either field is blank or the
    /// email has no `@`.
    pub fn parse(email: &str, password: &str) -> Result<Self, LoginError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() || !email.contains('@') {
            return Err(LoginError::InvalidInput(INVALID_CREDENTIALS_MESSAGE));
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// External identity check returning a server-issued session token.
pub trait Authenticator {
    fn authenticate(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionToken, LoginError>>;
}

/// Persist a freshly issued token and move to the role's landing page.
///
/// # Errors
///
/// Returns [`LoginError::RoleMismatch`] if the token was issued for another
/// role, or [`LoginError::Storage`] if the session could not be written. The
/// flag is written last, and a partial write is cleared, so a failed login
/// never leaves the gate open. No navigation happens on error.
pub fn complete_login<R: Redirector + ?Sized>(
    session: &SessionContext,
    role: Role,
    token: &SessionToken,
    redirector: &R,
) -> Result<(), LoginError> {
    if token.role != role {
        return Err(LoginError::RoleMismatch { expected: role, got: token.role });
    }
    let store = session.store();
    if let Err(e) = store.save_token(token).and_then(|()| store.set(role)) {
        if let Err(clear_err) = store.clear(role) {
            leptos::logging::warn!("could not roll back partial login: role={role} error={clear_err}");
        }
        return Err(e.into());
    }
    leptos::logging::log!("login complete: role={role} subject={}", token.subject);
    redirector.replace(session.config().home_path(role));
    Ok(())
}

/// Authenticate and, on success, complete the login.
///
/// # Errors
///
/// Propagates authenticator and [`complete_login`] failures.
pub async fn login<A, R>(
    session: &SessionContext,
    authenticator: &A,
    role: Role,
    credentials: &Credentials,
    redirector: &R,
) -> Result<(), LoginError>
where
    A: Authenticator,
    R: Redirector + ?Sized,
{
    let token = authenticator
        .authenticate(role, credentials)
        .await
        .inspect_err(|e| leptos::logging::warn!("login failed: role={role} error={e}"))?;
    complete_login(session, role, &token, redirector)
}

/// Drop the role's session and replace-navigate to its login page.
pub fn logout<R: Redirector + ?Sized>(session: &SessionContext, role: Role, redirector: &R) {
    if let Err(e) = session.store().clear(role) {
        leptos::logging::warn!("logout could not clear session: role={role} error={e}");
    }
    redirector.replace(session.config().login_path(role));
}
