//! End-to-end session behaviour through the public API: restore from
//! storage, gate decisions, login, and invalidation.

use futures::executor::block_on;
use leptos::prelude::*;
use marktracker::net::api::{ApiError, AuthApi};
use marktracker::net::types::{LoginRequest, LoginResponse};
use marktracker::pages::login::finish_login;
use marktracker::session::gate::{self, GateDecision, LOGIN_PATH};
use marktracker::session::login::{LoginFlow, LoginPhase};
use marktracker::session::storage::{MemoryStorage, SessionStorage};
use marktracker::session::store::SessionStore;
use marktracker::session::{Role, Session};
use marktracker::state::auth::AuthContext;

struct FixedAuth(Result<LoginResponse, ApiError>);

impl AuthApi for FixedAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.0.clone()
    }
}

fn stored(role: &str) -> MemoryStorage {
    MemoryStorage::with_entries([("token", "abc"), ("role", role), ("username", "s1")])
}

#[test]
fn no_session_is_sent_to_login() {
    let store = SessionStore::initialize(MemoryStorage::new());
    assert_eq!(
        gate::evaluate(store.current(), &[Role::Admin]),
        GateDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn role_mismatch_is_sent_to_login() {
    let store = SessionStore::initialize(stored("student"));
    assert!(store.is_authenticated());
    assert_eq!(
        gate::evaluate(store.current(), &[Role::Admin]),
        GateDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn matching_role_renders() {
    let store = SessionStore::initialize(stored("teacher"));
    assert_eq!(gate::evaluate(store.current(), &[Role::Teacher]), GateDecision::Render);
}

/// Run one login through the same path the login page uses.
fn log_in(storage: &MemoryStorage, api: &FixedAuth, username: &str, password: &str) -> (LoginFlow, Option<Session>) {
    Owner::new().with(|| {
        let auth = AuthContext::new(SessionStore::initialize(storage.clone()));
        let flow = RwSignal::new(LoginFlow::default());
        let request = flow
            .try_update(|f| f.begin(username, password))
            .and_then(Result::ok)
            .unwrap();
        block_on(finish_login(api, auth, flow, request));
        (flow.get_untracked(), auth.session_untracked())
    })
}

#[test]
fn rejected_credentials_show_server_message() {
    let storage = MemoryStorage::new();
    let api = FixedAuth(Err(ApiError::Status {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    }));

    let (flow, session) = log_in(&storage, &api, "bad", "bad");

    assert_eq!(flow.error(), Some("Invalid credentials"));
    assert_eq!(flow.phase(), LoginPhase::Idle);
    assert!(session.is_none());
    assert!(storage.is_empty());
}

#[test]
fn successful_login_persists_and_redirects_home() {
    let storage = MemoryStorage::new();
    let api = FixedAuth(Ok(LoginResponse {
        token: "xyz".to_owned(),
        role: Role::Admin,
        username: "root".to_owned(),
    }));

    let (flow, session) = log_in(&storage, &api, "root", "pw");

    assert_eq!(flow.phase(), LoginPhase::Success);
    let session = session.unwrap();
    assert_eq!(session.token(), "xyz");
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(session.username(), "root");
    assert_eq!(storage.get("token").as_deref(), Some("xyz"));
    assert_eq!(storage.get("role").as_deref(), Some("admin"));
    assert_eq!(storage.get("username").as_deref(), Some("root"));
    assert_eq!(gate::landing_path(Some(&session)), Some("/admin"));

    // A reload restores the same session.
    let reloaded = SessionStore::initialize(storage);
    assert_eq!(reloaded.current(), Some(&session));
}

#[test]
fn forbidden_call_drops_session() {
    let storage = stored("teacher");
    let mut store = SessionStore::initialize(storage.clone());
    assert!(store.invalidate_on(&ApiError::Status { status: 403, message: None }));

    assert!(store.current().is_none());
    assert!(storage.is_empty());
    assert_eq!(
        gate::evaluate(store.current(), &[Role::Teacher]),
        GateDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn logout_is_idempotent() {
    let storage = stored("student");
    let mut store = SessionStore::initialize(storage.clone());
    store.logout();
    let after_one = (store.current().cloned(), storage.len());
    store.logout();
    assert_eq!((store.current().cloned(), storage.len()), after_one);
    assert_eq!(after_one, (None, 0));
}
