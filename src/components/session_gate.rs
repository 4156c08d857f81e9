//! Route guard for role screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only authorization check in the client. It reads the session through
//! the store handle, never from storage, and re-evaluates whenever the
//! session changes, so a forced logout mid-screen redirects immediately.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::Role;
use crate::session::gate::{self, GateDecision};
use crate::state::auth::use_auth;

/// Render `children` only for a session whose role is in `allowed`;
/// otherwise redirect to the login screen.
#[component]
pub fn SessionGate(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match gate::evaluate(auth.session().as_ref(), allowed) {
        GateDecision::Render => children().into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
