//! Wire DTOs for the mark-tracker REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON and Mongo-style `_id`
//! identifiers. Optional profile fields default to `None` because older
//! records omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful authentication payload. An unknown `role` fails to decode.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub username: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("username", &self.username)
            .finish()
    }
}

/// Error body returned with non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// An account as listed by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub roll_number: String,
}

/// Body of `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub role: Role,
    pub full_name: String,
    pub roll_number: String,
}

/// Body of `PUT /users/password/{id}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub new_password: String,
}

/// One subject mark for one student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    pub subject: String,
    pub marks: f64,
}

/// Body of `POST /studentmarks`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMark {
    pub roll_number: String,
    pub marks: f64,
    pub subject: String,
}

/// Body of `PUT /studentmarks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkUpdate {
    pub marks: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Submitted,
    Resolved,
    #[serde(other)]
    Other,
}

impl ComplaintStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Resolved => "Resolved",
            Self::Other => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    pub message: String,
    pub status: ComplaintStatus,
}

/// Body of `POST /complaints`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComplaint {
    pub message: String,
}
