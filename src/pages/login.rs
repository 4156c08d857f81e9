//! Username/password login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `LoginFlow` for one form. The flow rejects resubmission while a
//! request is in flight and the inputs are disabled for the same period.
//! Navigation after success is not done here: the authenticated redirect
//! observes the session, so it also fires for a session restored on reload.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::{ApiClient, AuthApi};
use crate::net::types::LoginRequest;
use crate::session::Role;
use crate::session::login::{LoginFlow, hand_off};
use crate::session::storage::SessionStorage;
use crate::state::auth::{AuthContext, use_auth};
use crate::util::auth::install_authenticated_redirect;
use crate::util::task::spawn;

/// Role preselected on the landing page, if the query names a known one.
pub fn role_hint(raw: Option<&str>) -> Option<Role> {
    raw.and_then(|r| r.parse::<Role>().ok())
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Logging in..." } else { "Login" }
}

/// Send `request` and hand the answer to the session store.
///
/// The store is updated even when the form was unmounted while the request
/// was in flight; only the form state is skipped then.
pub async fn finish_login<A, S>(api: &A, auth: AuthContext<S>, flow: RwSignal<LoginFlow>, request: LoginRequest)
where
    A: AuthApi,
    S: SessionStorage + 'static,
{
    let outcome = api.login(&request).await;
    let Some(result) = auth.update(|store| hand_off(outcome, store)) else {
        log::warn!("login: session store gone before the response arrived");
        return;
    };
    if flow.try_update(|f| f.settle(result)).is_none() {
        log::debug!("login: form closed before the response arrived");
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = expect_context::<ApiClient>();
    install_authenticated_redirect(auth, use_navigate());

    let query = use_query_map();
    let hint = move || query.with(|q| role_hint(q.get("role").as_deref()));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let flow = RwSignal::new(LoginFlow::default());
    let submitting = move || flow.with(LoginFlow::is_submitting);
    let error = move || flow.with(|f| f.error().map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let request = match flow.try_update(|f| f.begin(&user, &pass)) {
            Some(Ok(request)) => request,
            Some(Err(reason)) => {
                log::debug!("login: submit ignored: {reason}");
                return;
            }
            None => return,
        };

        let api = api.clone();
        spawn(async move { finish_login(&api, auth, flow, request).await });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                {move || {
                    hint()
                        .map(|role| {
                            view! { <p class="login-card__subtitle">"Signing in as " {role.label()}</p> }
                        })
                }}
                <Show when=move || error().is_some()>
                    <p class="login-message">{move || error().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required=true
                        disabled=submitting
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        disabled=submitting
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || submit_label(submitting())}
                    </button>
                </form>
                <a href="/" class="login-link">"Choose a different role"</a>
            </div>
        </div>
    }
}
