//! Public landing page.

use leptos::prelude::*;

use crate::config::{DEFAULT_ADMIN_LOGIN_PATH, DEFAULT_USER_HOME_PATH, DEFAULT_USER_LOGIN_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"FilmFund.io"</h1>
            <p>"Film financing, on chain."</p>
            <nav class="home-nav">
                <a href=DEFAULT_USER_LOGIN_PATH class="home-link">"Investor Sign In"</a>
                <a href=DEFAULT_USER_HOME_PATH class="home-link">"Dashboard"</a>
                <a href=DEFAULT_ADMIN_LOGIN_PATH class="home-link home-link--muted">"Admin"</a>
            </nav>
        </div>
    }
}
