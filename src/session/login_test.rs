use super::*;
use crate::session::storage::MemoryStorage;
use crate::session::{Role, Session};

// =============================================================
// Helpers
// =============================================================

fn ok_response(token: &str, role: Role, username: &str) -> Result<LoginResponse, ApiError> {
    Ok(LoginResponse {
        token: token.to_owned(),
        role,
        username: username.to_owned(),
    })
}

// =============================================================
// begin
// =============================================================

#[test]
fn new_flow_is_idle_without_error() {
    let flow = LoginFlow::default();
    assert_eq!(flow.phase(), LoginPhase::Idle);
    assert!(flow.error().is_none());
    assert!(!flow.is_submitting());
}

#[test]
fn begin_moves_to_submitting_and_builds_request() {
    let mut flow = LoginFlow::default();
    let req = flow.begin("root", "pw").unwrap();
    assert_eq!(req.username, "root");
    assert_eq!(req.password, "pw");
    assert!(flow.is_submitting());
}

#[test]
fn begin_sends_username_as_typed() {
    let mut flow = LoginFlow::default();
    let req = flow.begin("  root ", " pw ").unwrap();
    assert_eq!(req.username, "  root ");
    assert_eq!(req.password, " pw ");
}

#[test]
fn begin_rejects_empty_credentials() {
    let mut flow = LoginFlow::default();
    assert_eq!(flow.begin("", "pw"), Err(SubmitRejected::MissingCredentials));
    assert_eq!(flow.begin("   ", "pw"), Err(SubmitRejected::MissingCredentials));
    assert_eq!(flow.begin("root", ""), Err(SubmitRejected::MissingCredentials));
    assert_eq!(flow.phase(), LoginPhase::Idle);
}

#[test]
fn begin_rejects_duplicate_submission() {
    let mut flow = LoginFlow::default();
    flow.begin("root", "pw").unwrap();
    assert_eq!(flow.begin("root", "pw"), Err(SubmitRejected::AlreadySubmitting));
    assert!(flow.is_submitting());
}

#[test]
fn begin_clears_previous_error() {
    let mut flow = LoginFlow::default();
    let mut store = SessionStore::initialize(MemoryStorage::new());
    flow.begin("bad", "bad").unwrap();
    flow.complete(Err(ApiError::Status { status: 401, message: None }), &mut store);
    assert!(flow.error().is_some());
    flow.begin("root", "pw").unwrap();
    assert!(flow.error().is_none());
}

// =============================================================
// complete
// =============================================================

#[test]
fn success_forwards_fields_unchanged() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let mut flow = LoginFlow::default();
    flow.begin("root", "pw").unwrap();
    flow.complete(ok_response("xyz", Role::Admin, "root"), &mut store);

    assert_eq!(flow.phase(), LoginPhase::Success);
    assert_eq!(store.current(), Some(&Session::new("xyz", Role::Admin, "root").unwrap()));
    assert_eq!(storage.len(), 3);
}

#[test]
fn rejection_shows_server_message_verbatim() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let mut flow = LoginFlow::default();
    flow.begin("bad", "bad").unwrap();
    flow.complete(
        Err(ApiError::Status {
            status: 401,
            message: Some("Invalid credentials".to_owned()),
        }),
        &mut store,
    );
    assert_eq!(flow.phase(), LoginPhase::Idle);
    assert_eq!(flow.error(), Some("Invalid credentials"));
    assert!(store.current().is_none());
}

#[test]
fn rejection_without_message_uses_generic_text() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let mut flow = LoginFlow::default();
    flow.begin("bad", "bad").unwrap();
    flow.complete(Err(ApiError::Status { status: 500, message: None }), &mut store);
    assert_eq!(flow.error(), Some(LOGIN_FAILED));
}

#[test]
fn transport_and_decode_failures_use_unexpected_error() {
    for err in [
        ApiError::Transport("connection refused".to_owned()),
        ApiError::Decode("expected value".to_owned()),
    ] {
        let mut store = SessionStore::initialize(MemoryStorage::new());
        let mut flow = LoginFlow::default();
        flow.begin("root", "pw").unwrap();
        flow.complete(Err(err), &mut store);
        assert_eq!(flow.phase(), LoginPhase::Idle);
        assert_eq!(flow.error(), Some(UNEXPECTED_ERROR));
        assert!(store.current().is_none());
    }
}

#[test]
fn success_with_empty_token_is_treated_as_malformed() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let mut flow = LoginFlow::default();
    flow.begin("root", "pw").unwrap();
    flow.complete(ok_response("", Role::Admin, "root"), &mut store);
    assert_eq!(flow.phase(), LoginPhase::Idle);
    assert_eq!(flow.error(), Some(UNEXPECTED_ERROR));
    assert!(store.current().is_none());
    assert!(storage.is_empty());
}

#[test]
fn failed_attempt_allows_retry() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let mut flow = LoginFlow::default();
    flow.begin("root", "wrong").unwrap();
    flow.complete(Err(ApiError::Status { status: 401, message: None }), &mut store);
    assert!(flow.begin("root", "right").is_ok());
}

// =============================================================
// hand_off / settle
// =============================================================

#[test]
fn hand_off_establishes_session_without_a_flow() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    assert_eq!(hand_off(ok_response("xyz", Role::Admin, "root"), &mut store), Ok(()));
    assert_eq!(store.current().map(Session::username), Some("root"));
}

#[test]
fn hand_off_failure_leaves_store_alone() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let err = ApiError::Status {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(hand_off(Err(err), &mut store), Err("Invalid credentials".to_owned()));
    assert!(store.current().is_none());
}

#[test]
fn settle_applies_prior_result() {
    let mut flow = LoginFlow::default();
    flow.begin("root", "pw").unwrap();
    flow.settle(Err(LOGIN_FAILED.to_owned()));
    assert_eq!(flow.phase(), LoginPhase::Idle);
    assert_eq!(flow.error(), Some(LOGIN_FAILED));

    flow.begin("root", "pw").unwrap();
    flow.settle(Ok(()));
    assert_eq!(flow.phase(), LoginPhase::Success);
    assert!(flow.error().is_none());
}
