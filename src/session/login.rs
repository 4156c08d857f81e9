//! Login state machine: `Idle -> Submitting -> Success | Idle(error)`.
//!
//! The flow never inspects the token. It forwards the three response fields
//! to the store unchanged, and on any failure it leaves the store alone.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::SessionError;
use super::storage::SessionStorage;
use super::store::SessionStore;
use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};

/// Shown when the server rejects the login without a message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown for transport and parse failures.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A login request is already in progress.")]
    AlreadySubmitting,
    #[error("Enter both username and password.")]
    MissingCredentials,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    phase: LoginPhase,
    error: Option<String>,
}

impl LoginFlow {
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Message from the last failed attempt, if the form should show one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inputs and the submit control are disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Start a submission, yielding the one request to send.
    ///
    /// The credentials are sent exactly as typed; only the emptiness check
    /// ignores surrounding whitespace in the username.
    ///
    /// # Errors
    ///
    /// Rejects a second submission while one is in flight, and empty
    /// credentials. A rejection leaves the phase unchanged.
    pub fn begin(&mut self, username: &str, password: &str) -> Result<LoginRequest, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if username.trim().is_empty() || password.is_empty() {
            return Err(SubmitRejected::MissingCredentials);
        }
        self.phase = LoginPhase::Submitting;
        self.error = None;
        log::debug!("login: submitting user={username}");
        Ok(LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Apply the endpoint's answer, establishing the session on success.
    pub fn complete<S: SessionStorage>(
        &mut self,
        outcome: Result<LoginResponse, ApiError>,
        store: &mut SessionStore<S>,
    ) {
        self.settle(hand_off(outcome, store));
    }

    /// Record the result of a [`hand_off`] that already ran.
    pub fn settle(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.phase = LoginPhase::Success;
                self.error = None;
            }
            Err(message) => {
                log::info!("login: failed: {message}");
                self.phase = LoginPhase::Idle;
                self.error = Some(message);
            }
        }
    }
}

/// Forward a successful response to `store`, or turn the failure into the
/// form message. The store is untouched on every failure.
///
/// # Errors
///
/// Returns the text to show on the login form.
pub fn hand_off<S: SessionStorage>(
    outcome: Result<LoginResponse, ApiError>,
    store: &mut SessionStore<S>,
) -> Result<(), String> {
    let resp = outcome.map_err(|e| failure_message(&e))?;
    store
        .login(resp.token, resp.role, resp.username)
        .map_err(|e: SessionError| {
            log::warn!("login: malformed success response: {e}");
            UNEXPECTED_ERROR.to_owned()
        })
}

/// Map a failed exchange to the text shown on the login form.
pub fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => err.describe(LOGIN_FAILED),
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Unavailable => UNEXPECTED_ERROR.to_owned(),
    }
}
