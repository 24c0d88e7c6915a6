//! Protected landing pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is wrapped in `RequireRole`, so its panel is only built after the
//! gate grants access. Logging out clears that role and replace-navigates to
//! its login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::logout;
use crate::gate::require_role::RequireRole;
use crate::session::Role;
use crate::session::context::SessionContext;
use crate::session::token::{Clock, SessionToken, SystemClock};
use crate::util::nav::RouterRedirector;

/// `/dashboard`
#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::User>
            <SessionPanel role=Role::User title="Investor Dashboard"/>
        </RequireRole>
    }
}

/// `/admin`
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <SessionPanel role=Role::Admin title="Admin Console"/>
        </RequireRole>
    }
}

#[component]
fn SessionPanel(role: Role, title: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let token = session.store().load_token(role);
    let remaining = token.as_ref().map(|token| session_remaining_label(token, SystemClock.now_secs()));
    let subject = token.map(|token| token.subject);

    let on_logout = move |_| {
        let redirector = RouterRedirector::new(navigate.clone());
        logout(&session, role, &redirector);
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{title}</h1>
                {subject.map(|subject| view! { <span class="dashboard-subject">{subject}</span> })}
                {remaining.map(|remaining| view! { <span class="dashboard-expiry">{remaining}</span> })}
                <button class="dashboard-logout" on:click=on_logout>
                    "Log Out"
                </button>
            </header>
        </div>
    }
}

/// Human-readable time left on `token` at `now` (unix seconds).
fn session_remaining_label(token: &SessionToken, now: u64) -> String {
    match token.remaining_secs(now) {
        0 => "Session expired".to_owned(),
        secs if secs < 60 => "Session expires in under a minute".to_owned(),
        secs if secs < 3600 => format!("Session expires in {}m", secs / 60),
        secs => format!("Session expires in {}h {}m", secs / 3600, (secs % 3600) / 60),
    }
}
