//! REST client for the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `LoginError::Unavailable`, since logging in is
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use crate::auth::{Authenticator, Credentials, LoginError};
use crate::session::Role;
use crate::session::token::SessionToken;

#[derive(Serialize)]
struct LoginRequest<'a> {
    role: Role,
    email: &'a str,
    password: &'a str,
}

fn login_body(role: Role, credentials: &Credentials) -> LoginRequest<'_> {
    LoginRequest { role, email: &credentials.email, password: &credentials.password }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> LoginError {
    LoginError::Rejected { status }
}

/// Posts credentials to the configured login endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthenticator {
    endpoint: String,
}

impl HttpAuthenticator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_login(&self, role: Role, credentials: &Credentials) -> Result<SessionToken, LoginError> {
        let body = login_body(role, credentials);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            resp.json::<SessionToken>()
                .await
                .map_err(|e| LoginError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(LoginError::Unavailable)
        }
    }
}

impl Authenticator for HttpAuthenticator {
    fn authenticate(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionToken, LoginError>> {
        self.post_login(role, credentials)
    }
}
