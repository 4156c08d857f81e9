//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login and role-select screens apply identical authenticated redirect
//! behavior, including for a session restored from storage on reload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::gate;
use crate::state::auth::AuthContext;

/// Send an already authenticated visitor to their role's home screen.
pub fn install_authenticated_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = gate::landing_path(auth.session().as_ref()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
