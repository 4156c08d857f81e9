use super::*;

fn client(base: &str) -> ApiClient {
    ApiClient::new(&ClientConfig {
        api_base: base.to_owned(),
        ..ClientConfig::default()
    })
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn resource_paths_embed_ids() {
    assert_eq!(user_path("u1"), "/users/u1");
    assert_eq!(password_path("u1"), "/users/password/u1");
    assert_eq!(mark_path("m9"), "/studentmarks/m9");
    assert_eq!(complaint_path("c3"), "/complaints/c3");
}

#[test]
fn url_joins_base_and_path() {
    let api = client("https://example.test/api");
    assert_eq!(api.url("/auth/login"), "https://example.test/api/auth/login");
}

#[test]
fn only_401_and_403_invalidate_session() {
    let status = |status| ApiError::Status { status, message: None };
    assert!(status(401).invalidates_session());
    assert!(status(403).invalidates_session());
    assert!(!status(400).invalidates_session());
    assert!(!status(404).invalidates_session());
    assert!(!status(500).invalidates_session());
    assert!(!ApiError::Transport("offline".to_owned()).invalidates_session());
    assert!(!ApiError::Unavailable.invalidates_session());
}

#[test]
fn describe_prefers_server_message() {
    let err = ApiError::Status {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert_eq!(err.describe("Login failed"), "Invalid credentials");
}

#[test]
fn describe_falls_back_without_message() {
    let empty = ApiError::Status {
        status: 500,
        message: Some(String::new()),
    };
    assert_eq!(empty.describe("Failed to create user."), "Failed to create user.");
    let none = ApiError::Status { status: 500, message: None };
    assert_eq!(none.describe("Failed to create user."), "Failed to create user.");
    let transport = ApiError::Transport("offline".to_owned());
    assert_eq!(transport.describe("fallback"), "fallback");
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = client("http://localhost:5000/api");
    let request = LoginRequest {
        username: "u".to_owned(),
        password: "p".to_owned(),
    };
    let result = futures::executor::block_on(api.login(&request));
    assert_eq!(result, Err(ApiError::Unavailable));
    let users = futures::executor::block_on(api.list_users("tok"));
    assert_eq!(users, Err(ApiError::Unavailable));
}
