//! Single owner of the current [`Session`].
//!
//! DESIGN
//! ======
//! The in-memory session is the source of truth while the app runs; every
//! mutation writes through to [`SessionStorage`] so a reload can rebuild it.
//! Storage is kept all-or-nothing: a partial mirror found at startup is
//! cleared, and a failed write is rolled back.
//!
//! Observers register with [`SessionStore::subscribe`] and are called after
//! each state change. The Leptos layer uses one subscription to bump a
//! revision signal, so components re-render without holding their own copy.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::storage::{ROLE_KEY, SESSION_KEYS, SessionStorage, TOKEN_KEY, USERNAME_KEY};
use super::{Role, Session, SessionError};
use crate::net::api::ApiError;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Option<&Session>)>;

pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rebuild the session from storage without touching the network.
    ///
    /// All three keys must be present, non-empty, and carry a known role.
    /// Anything less yields a logged-out store with the leftovers removed.
    pub fn initialize(storage: S) -> Self {
        let session = restore(&storage);
        if session.is_none() && SESSION_KEYS.iter().any(|key| storage.get(key).is_some()) {
            log::warn!("session: discarding incomplete stored session");
            clear_keys(&storage);
        }
        if let Some(s) = &session {
            log::info!("session: restored user={} role={}", s.username(), s.role());
        }
        Self {
            storage,
            session,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Establish a session for a freshly authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if `token` or `username` is empty; the
    /// store is left unchanged in that case.
    pub fn login(&mut self, token: impl Into<String>, role: Role, username: impl Into<String>) -> Result<(), SessionError> {
        let session = Session::new(token, role, username)?;
        self.establish(session);
        Ok(())
    }

    /// Install an already validated session.
    pub fn establish(&mut self, session: Session) {
        if let Err(e) = write_keys(&self.storage, &session) {
            log::warn!("session: storage write failed, keeping session in memory only: {e}");
            clear_keys(&self.storage);
        }
        log::info!("session: login user={} role={}", session.username(), session.role());
        self.session = Some(session);
        self.notify();
    }

    /// Drop the session and its stored mirror. Safe to call when logged out.
    ///
    /// A stored key that cannot be removed is overwritten with an empty
    /// value, so the mirror never restores after logout.
    pub fn logout(&mut self) {
        clear_keys(&self.storage);
        if let Some(previous) = self.session.take() {
            log::info!("session: logout user={}", previous.username());
            self.notify();
        }
    }

    /// Log out if `err` says the backend no longer accepts the token.
    ///
    /// Returns `true` when the session was invalidated.
    pub fn invalidate_on(&mut self, err: &ApiError) -> bool {
        if !err.invalidates_session() || self.session.is_none() {
            return false;
        }
        log::info!("session: invalidated by backend ({err})");
        self.logout();
        true
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Register `listener` to be called with the new state after every change.
    pub fn subscribe(&mut self, listener: impl Fn(Option<&Session>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        let current = self.session.as_ref();
        for (_, listener) in &self.listeners {
            listener(current);
        }
    }
}

fn restore(storage: &impl SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY)?;
    let role = storage.get(ROLE_KEY)?.parse::<Role>().ok()?;
    let username = storage.get(USERNAME_KEY)?;
    Session::new(token, role, username).ok()
}

fn write_keys(storage: &impl SessionStorage, session: &Session) -> Result<(), super::storage::StorageError> {
    storage.set(TOKEN_KEY, session.token())?;
    storage.set(ROLE_KEY, session.role().as_str())?;
    storage.set(USERNAME_KEY, session.username())
}

/// Remove every session key. A key that cannot be removed is blanked
/// instead, which `restore` rejects, so a reload never revives it.
fn clear_keys(storage: &impl SessionStorage) {
    for key in SESSION_KEYS {
        let Err(e) = storage.remove(key) else {
            continue;
        };
        log::warn!("session: failed to remove stored {key}: {e}; blanking it");
        if let Err(e) = storage.set(key, "") {
            log::error!("session: stored {key} left in place: {e}");
        }
    }
}
