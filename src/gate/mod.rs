//! Access gate for role-protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected route runs one check per mount, on the client:
//! `Unchecked -> Granted` renders the wrapped view untouched,
//! `Unchecked -> Denied` renders nothing and replace-navigates to the role's
//! login path. Nothing is memoized between passes, so a flag written by the
//! login flow is honored by the very next render.
//!
//! Until that check runs the route stays `Unchecked` and renders nothing.
//! Server renders never leave `Unchecked`, so the hydrating client starts
//! from the same empty markup whatever its local session says.
//!
//! Denial is silent navigation, never an error value.


pub mod require_role;

use crate::config::AccessConfig;
use crate::session::{Role, RoleCheck};
use crate::util::nav::Redirector;

/// Per-render gate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unchecked,
    Granted,
    Denied,
}

impl GateState {
    /// Apply the authentication result. Only `Unchecked` transitions.
    #[must_use]
    pub fn resolve(self, authenticated: bool) -> Self {
        match self {
            GateState::Unchecked if authenticated => GateState::Granted,
            GateState::Unchecked => GateState::Denied,
            terminal => terminal,
        }
    }
}

/// What a protected route should do this render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect { to: String },
}

impl GateDecision {
    #[must_use]
    pub fn is_render(&self) -> bool {
        matches!(self, GateDecision::Render)
    }
}

/// Evaluate the gate for `role` against an explicit identity predicate.
pub fn decide(check: &dyn RoleCheck, config: &AccessConfig, role: Role) -> GateDecision {
    match GateState::Unchecked.resolve(check.is_authenticated(role)) {
        GateState::Granted => GateDecision::Render,
        GateState::Denied | GateState::Unchecked => GateDecision::Redirect { to: config.login_path(role).to_owned() },
    }
}

/// Carry out `decision`, returning whether the protected view may render.
pub fn enforce<R: Redirector + ?Sized>(decision: &GateDecision, redirector: &R) -> bool {
    match decision {
        GateDecision::Render => true,
        GateDecision::Redirect { to } => {
            leptos::logging::warn!("access denied: redirecting to {to}");
            redirector.replace(to);
            false
        }
    }
}

/// Build the protected view only in the `Granted` state.
pub fn gated<T>(state: GateState, build: impl FnOnce() -> T) -> Option<T> {
    match state {
        GateState::Granted => Some(build()),
        GateState::Unchecked | GateState::Denied => None,
    }
}
