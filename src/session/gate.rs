//! Authorization decision for protected screens.
//!
//! Every disallowed case degrades to the same redirect to the login screen;
//! a role mismatch is deliberately indistinguishable from being logged out.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::{Role, Session};

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(&'static str),
}

/// Decide whether a screen restricted to `allowed` may render for `session`.
///
/// An empty `allowed` set admits nobody.
pub fn evaluate(session: Option<&Session>, allowed: &[Role]) -> GateDecision {
    match session {
        Some(s) if allowed.contains(&s.role()) => GateDecision::Render,
        _ => GateDecision::Redirect(LOGIN_PATH),
    }
}

/// Where an authenticated visitor of the login screen belongs.
pub fn landing_path(session: Option<&Session>) -> Option<&'static str> {
    session.map(|s| s.role().home_path())
}
