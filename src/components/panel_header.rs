//! Title bar shared by the role screens, with the logout control.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn PanelHeader(title: &'static str) -> impl IntoView {
    let auth = use_auth();

    let username = move || {
        auth.session()
            .map_or_else(|| "User".to_owned(), |s| s.username().to_owned())
    };

    // Logging out is enough; the surrounding gate redirects on the change.
    let on_logout = move |_| auth.logout();

    view! {
        <header class="panel-header">
            <h1>{title}</h1>
            <button class="logout-button" on:click=on_logout>
                "Log Out (" {username} ")"
            </button>
        </header>
    }
}
