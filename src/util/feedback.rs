//! Error reporting for role screens.
//!
//! Failures either end the session (401/403) or land in a page-local error
//! banner. Nothing is retried.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::auth::AuthContext;
use crate::util::task::spawn;

/// Banner text for a failed call: `"<context>: <server message or fallback>"`.
pub fn failure_text(context: &str, err: &ApiError, fallback: &str) -> String {
    format!("{context}: {}", err.describe(fallback))
}

/// Route a failed call: drop the session on 401/403, otherwise show the
/// failure on `banner`.
pub fn report_failure(
    auth: AuthContext,
    banner: RwSignal<Option<String>>,
    context: &str,
    err: &ApiError,
    fallback: &str,
) {
    if auth.invalidate_on(err) {
        return;
    }
    log::warn!("{context}: {err}");
    banner.set(Some(failure_text(context, err, fallback)));
}

/// Run an authenticated call in the background. `on_success` typically
/// refetches the affected list; failures go through [`report_failure`].
/// Without a session nothing is sent.
pub fn spawn_mutation<C, Fut, D>(
    auth: AuthContext,
    banner: RwSignal<Option<String>>,
    context: &'static str,
    fallback: &'static str,
    call: C,
    on_success: D,
) where
    C: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    D: FnOnce() + 'static,
{
    let Some(token) = auth.token() else {
        log::debug!("{context}: no session, request skipped");
        return;
    };
    banner.set(None);
    spawn(async move {
        match call(token).await {
            Ok(()) => on_success(),
            Err(e) => report_failure(auth, banner, context, &e, fallback),
        }
    });
}

/// Load a list for a resource. Failures are reported and yield an empty
/// list; without a session the call is not made.
pub async fn load_list<T, C, Fut>(
    auth: AuthContext,
    banner: RwSignal<Option<String>>,
    context: &'static str,
    fallback: &'static str,
    call: C,
) -> Vec<T>
where
    C: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let Some(token) = auth.token() else {
        return Vec::new();
    };
    match call(token).await {
        Ok(list) => list,
        Err(e) => {
            report_failure(auth, banner, context, &e, fallback);
            Vec::new()
        }
    }
}
