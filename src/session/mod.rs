//! Client-held session: the credential bundle, its store, and the gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` turns credentials into a [`Session`], `store` owns it and mirrors
//! it into durable storage, and `gate` decides whether a protected screen may
//! render. Nothing in this module depends on Leptos, so the whole lifecycle
//! is testable on the host.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod gate;
pub mod login;
pub mod storage;
pub mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role as issued by the authentication endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Human-readable label for buttons and headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }

    /// Route of the screen this role lands on after login.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Teacher => "/teacher",
            Self::Student => "/student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(SessionError::UnknownRole(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session token is empty")]
    EmptyToken,
    #[error("session username is empty")]
    EmptyUsername,
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
}

/// Authenticated identity bundle.
///
/// Only constructible through [`Session::new`], which rejects empty fields,
/// so a value of this type is always a complete session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    role: Role,
    username: String,
}

impl Session {
    /// Build a session from its three parts.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] or [`SessionError::EmptyUsername`]
    /// when either string is empty.
    pub fn new(token: impl Into<String>, role: Role, username: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        let username = username.into();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        Ok(Self { token, role, username })
    }

    /// Opaque bearer credential. Never inspected client-side.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("username", &self.username)
            .finish()
    }
}
