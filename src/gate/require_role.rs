//! `<RequireRole>` route wrapper.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{GateState, decide, enforce, gated};
use crate::session::Role;
use crate::session::context::SessionContext;
use crate::util::nav::RouterRedirector;

/// Render `children` only when the session is authenticated for `role`;
/// otherwise replace-navigate to that role's login path.
///
/// The check runs in an effect, so SSR and the first hydrate pass both
/// render the empty `Unchecked` state.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = RwSignal::new(GateState::Unchecked);
    let redirector = RouterRedirector::new(use_navigate());

    Effect::new(move || {
        let decision = decide(session.check(), session.config(), role);
        state.set(GateState::Unchecked.resolve(decision.is_render()));
        enforce(&decision, &redirector);
    });

    move || gated(state.get(), || children())
}
