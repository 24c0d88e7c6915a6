//! Login pages for investors and administrators.
//!
//! Both pages share one form; only the role, heading, and target landing page
//! differ. Credentials go to the identity service, never compared here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::Credentials;
use crate::session::Role;
use crate::session::context::SessionContext;

pub(crate) fn login_heading(role: Role) -> &'static str {
    match role {
        Role::User => "Investor Sign In",
        Role::Admin => "Admin Sign In",
    }
}

/// `/user/login`
#[component]
pub fn UserLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::User/> }
}

/// `/login`
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginForm role=Role::Admin/> }
}

#[component]
fn LoginForm(role: Role) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match Credentials::parse(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let redirector = crate::util::nav::RouterRedirector::new(navigate.clone());
            leptos::task::spawn_local(async move {
                let authenticator = crate::net::api::HttpAuthenticator::new(session.config().login_endpoint.clone());
                if let Err(e) = crate::auth::login(&session, &authenticator, role, &credentials, &redirector).await {
                    info.set(e.to_string());
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate, credentials);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FilmFund.io"</h1>
                <p class="login-card__subtitle">{login_heading(role)}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
