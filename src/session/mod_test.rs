use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_wire_names() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
    assert_eq!("student".parse::<Role>(), Ok(Role::Student));
}

#[test]
fn role_rejects_unknown_and_differently_cased_names() {
    assert_eq!(
        "Admin".parse::<Role>(),
        Err(SessionError::UnknownRole("Admin".to_owned()))
    );
    assert!("parent".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    let role: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(role, Role::Student);
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
}

#[test]
fn role_home_paths_are_distinct() {
    assert_eq!(Role::Admin.home_path(), "/admin");
    assert_eq!(Role::Teacher.home_path(), "/teacher");
    assert_eq!(Role::Student.home_path(), "/student");
}

#[test]
fn role_display_matches_storage_form() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_new_keeps_fields() {
    let session = Session::new("abc", Role::Student, "s1").unwrap();
    assert_eq!(session.token(), "abc");
    assert_eq!(session.role(), Role::Student);
    assert_eq!(session.username(), "s1");
}

#[test]
fn session_new_rejects_empty_token() {
    assert_eq!(Session::new("", Role::Admin, "root"), Err(SessionError::EmptyToken));
}

#[test]
fn session_new_rejects_empty_username() {
    assert_eq!(Session::new("xyz", Role::Admin, ""), Err(SessionError::EmptyUsername));
}

#[test]
fn session_debug_redacts_token() {
    let session = Session::new("very-secret", Role::Teacher, "t1").unwrap();
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("very-secret"));
    assert!(rendered.contains("t1"));
    assert!(rendered.contains("<redacted>"));
}
