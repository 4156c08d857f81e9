//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the session gate, the login and role-select redirects, and every
//! role screen that needs a bearer token. The handle owns nothing itself: the
//! [`SessionStore`] sits in a local `StoredValue`, and a store subscription
//! bumps a revision signal so reads through [`AuthContext::session`] are
//! reactive.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::session::Session;
use crate::session::storage::{BrowserStorage, SessionStorage};
use crate::session::store::SessionStore;

/// `Copy` handle to the process-wide session store.
pub struct AuthContext<S: 'static = BrowserStorage> {
    store: StoredValue<SessionStore<S>, LocalStorage>,
    revision: RwSignal<u64>,
}

impl<S: 'static> Clone for AuthContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for AuthContext<S> {}

impl<S: SessionStorage + 'static> AuthContext<S> {
    /// Wrap `store`, subscribing for the lifetime of the current owner.
    pub fn new(mut store: SessionStore<S>) -> Self {
        let revision = RwSignal::new(0_u64);
        let subscription = store.subscribe(move |_| {
            revision.try_update(|n| *n = n.wrapping_add(1));
        });
        let store = StoredValue::new_local(store);
        on_cleanup(move || {
            store.try_update_value(|s| s.unsubscribe(subscription));
        });
        Self { store, revision }
    }

    /// Current session; re-runs the calling effect or view on every change.
    pub fn session(&self) -> Option<Session> {
        self.revision.track();
        self.session_untracked()
    }

    pub fn session_untracked(&self) -> Option<Session> {
        self.store.with_value(|s| s.current().cloned())
    }

    /// Bearer token for an outgoing call. Untracked.
    pub fn token(&self) -> Option<String> {
        self.store.with_value(|s| s.bearer_token().map(str::to_owned))
    }

    /// Number of session changes observed so far. Untracked.
    pub fn revision(&self) -> u64 {
        self.revision.get_untracked()
    }

    /// Run `f` with mutable access to the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut SessionStore<S>) -> R) -> Option<R> {
        self.store.try_update_value(f)
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
    }

    /// Drop the session if `err` is a 401/403. Returns whether it did.
    pub fn invalidate_on(&self, err: &ApiError) -> bool {
        self.update(|s| s.invalidate_on(err)).unwrap_or(false)
    }
}

/// Restore the session from `localStorage` and provide it as context.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new(SessionStore::initialize(BrowserStorage));
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
