//! Landing page: pick a role, then sign in.

#[cfg(test)]
#[path = "role_select_test.rs"]
mod role_select_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Role;
use crate::session::gate::LOGIN_PATH;
use crate::state::auth::use_auth;
use crate::util::auth::install_authenticated_redirect;

/// Login route carrying the chosen role as a display hint.
pub fn login_path_for(role: Role) -> String {
    format!("{LOGIN_PATH}?role={}", role.as_str())
}

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_authenticated_redirect(auth, navigate.clone());

    let buttons = Role::ALL
        .into_iter()
        .map(|role| {
            let navigate = navigate.clone();
            view! {
                <button
                    class="role-button"
                    on:click=move |_| navigate(&login_path_for(role), NavigateOptions::default())
                >
                    {role.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="role-selector-page">
            <h1>"Welcome to Student Mark Tracker"</h1>
            <p>"Please select your role to continue:"</p>
            <div class="role-buttons">{buttons}</div>
        </div>
    }
}
