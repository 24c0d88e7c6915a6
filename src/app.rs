//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AccessConfig;
use crate::pages::{
    dashboard::{AdminDashboardPage, UserDashboardPage},
    home::HomePage,
    login::{AdminLoginPage, UserLoginPage},
};
use crate::session::context::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn access_config() -> AccessConfig {
    AccessConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("access config rejected, using defaults: {e}");
        AccessConfig::default()
    })
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::browser(access_config()));

    view! {
        <Stylesheet id="leptos" href="/pkg/filmfund.css"/>
        <Title text="FilmFund.io"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=AdminLoginPage/>
                <Route path=(StaticSegment("user"), StaticSegment("login")) view=UserLoginPage/>
                <Route path=StaticSegment("dashboard") view=UserDashboardPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
            </Routes>
        </Router>
    }
}
