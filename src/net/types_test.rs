use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_response_decodes_known_role() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"xyz","role":"admin","username":"root"}"#).unwrap();
    assert_eq!(resp.token, "xyz");
    assert_eq!(resp.role, Role::Admin);
    assert_eq!(resp.username, "root");
}

#[test]
fn login_response_rejects_unknown_role() {
    let resp = serde_json::from_str::<LoginResponse>(r#"{"token":"xyz","role":"owner","username":"root"}"#);
    assert!(resp.is_err());
}

#[test]
fn login_response_rejects_missing_field() {
    let resp = serde_json::from_str::<LoginResponse>(r#"{"token":"xyz","role":"admin"}"#);
    assert!(resp.is_err());
}

#[test]
fn login_request_debug_hides_password() {
    let req = LoginRequest {
        username: "root".to_owned(),
        password: "hunter2".to_owned(),
    };
    let rendered = format!("{req:?}");
    assert!(rendered.contains("root"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("Invalid credentials"));
    let without: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(without.message.is_none());
}

// =============================================================
// Records
// =============================================================

#[test]
fn user_decodes_mongo_id_and_camel_case() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","username":"s1","role":"student","fullName":"Jane Doe","rollNumber":"1001"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name.as_deref(), Some("Jane Doe"));
    assert_eq!(user.roll_number.as_deref(), Some("1001"));
}

#[test]
fn user_profile_fields_default_to_none() {
    let user: User = serde_json::from_str(r#"{"_id":"u2","username":"t1","role":"teacher"}"#).unwrap();
    assert!(user.full_name.is_none());
    assert!(user.roll_number.is_none());
}

#[test]
fn new_user_serializes_camel_case() {
    let body = NewUser {
        username: "s2".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Student,
        full_name: "Sam".to_owned(),
        roll_number: "1002".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "username": "s2",
            "password": "secret1",
            "role": "student",
            "fullName": "Sam",
            "rollNumber": "1002",
        })
    );
}

#[test]
fn password_reset_uses_new_password_key() {
    let body = PasswordReset {
        new_password: "abcdef".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "newPassword": "abcdef" })
    );
}

#[test]
fn mark_record_decodes() {
    let mark: MarkRecord = serde_json::from_str(
        r#"{"_id":"m1","rollNumber":"1001","studentName":"Jane","subject":"Math","marks":87.5}"#,
    )
    .unwrap();
    assert_eq!(mark.subject, "Math");
    assert!((mark.marks - 87.5).abs() < f64::EPSILON);
}

#[test]
fn complaint_status_tolerates_unknown_values() {
    let c: Complaint =
        serde_json::from_str(r#"{"_id":"c1","message":"mark missing","status":"Escalated"}"#).unwrap();
    assert_eq!(c.status, ComplaintStatus::Other);
    let c: Complaint =
        serde_json::from_str(r#"{"_id":"c2","message":"typo","status":"Submitted"}"#).unwrap();
    assert_eq!(c.status, ComplaintStatus::Submitted);
}
