//! REST API client for the mark-tracker backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call resolves to [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401/403 from any authenticated
//! call is the signal to drop the session; callers pass the error to
//! `SessionStore::invalidate_on` instead of inspecting statuses themselves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Complaint, LoginRequest, LoginResponse, MarkRecord, MarkUpdate, NewComplaint, NewMark, NewUser, PasswordReset,
    User, UserUpdate,
};
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the backend rejected the bearer token itself.
    pub fn invalidates_session(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(m), .. } if !m.is_empty() => Some(m),
            _ => None,
        }
    }

    /// The server's message verbatim, or `fallback`.
    pub fn describe(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Credential exchange against the authentication endpoint.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for rejected credentials and
    /// [`ApiError::Transport`]/[`ApiError::Decode`] for everything else.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

fn password_path(id: &str) -> String {
    format!("/users/password/{id}")
}

fn mark_path(id: &str) -> String {
    format!("/studentmarks/{id}")
}

fn complaint_path(id: &str) -> String {
    format!("/complaints/{id}")
}

/// HTTP client bound to one API base URL. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    // ---------------------------------------------------------
    // Users (admin)
    // ---------------------------------------------------------

    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.fetch_json("/users", token).await
    }

    /// `POST /users`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_user(&self, token: &str, user: &NewUser) -> Result<(), ApiError> {
        self.send(Verb::Post, "/users", token, Some(user)).await
    }

    /// `PUT /users/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_user(&self, token: &str, id: &str, update: &UserUpdate) -> Result<(), ApiError> {
        self.send(Verb::Put, &user_path(id), token, Some(update)).await
    }

    /// `DELETE /users/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Delete, &user_path(id), token, None).await
    }

    /// `PUT /users/password/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn reset_password(&self, token: &str, id: &str, new_password: &str) -> Result<(), ApiError> {
        let body = PasswordReset {
            new_password: new_password.to_owned(),
        };
        self.send(Verb::Put, &password_path(id), token, Some(&body)).await
    }

    // ---------------------------------------------------------
    // Marks
    // ---------------------------------------------------------

    /// `GET /studentmarks`. Students receive only their own records.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_marks(&self, token: &str) -> Result<Vec<MarkRecord>, ApiError> {
        self.fetch_json("/studentmarks", token).await
    }

    /// `POST /studentmarks`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_mark(&self, token: &str, mark: &NewMark) -> Result<(), ApiError> {
        self.send(Verb::Post, "/studentmarks", token, Some(mark)).await
    }

    /// `PUT /studentmarks/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_mark(&self, token: &str, id: &str, marks: f64) -> Result<(), ApiError> {
        self.send(Verb::Put, &mark_path(id), token, Some(&MarkUpdate { marks })).await
    }

    /// `DELETE /studentmarks/{id}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_mark(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Delete, &mark_path(id), token, None).await
    }

    // ---------------------------------------------------------
    // Complaints
    // ---------------------------------------------------------

    /// `GET /complaints`. Students receive only their own complaints.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_complaints(&self, token: &str) -> Result<Vec<Complaint>, ApiError> {
        self.fetch_json("/complaints", token).await
    }

    /// `POST /complaints`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_complaint(&self, token: &str, message: &str) -> Result<(), ApiError> {
        let body = NewComplaint {
            message: message.to_owned(),
        };
        self.send(Verb::Post, "/complaints", token, Some(&body)).await
    }

    /// `PUT /complaints/{id}` marks a complaint resolved.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn resolve_complaint(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Verb::Put, &complaint_path(id), token, None).await
    }

    // ---------------------------------------------------------
    // Transport
    // ---------------------------------------------------------

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = builder(Verb::Get, &self.url(path))
                .header("Authorization", &bearer(token))
                .build();
            let resp = dispatch(path, request).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(path), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    async fn send<B: Serialize>(&self, verb: Verb, path: &str, token: &str, body: Option<&B>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = builder(verb, &self.url(path)).header("Authorization", &bearer(token));
            let request = match body {
                Some(b) => req.json(b),
                None => req.build(),
            };
            dispatch(path, request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (verb, self.url(path), bearer(token), body.is_some());
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let path = "/auth/login";
            let request = gloo_net::http::Request::post(&self.url(path)).json(request);
            let resp = dispatch(path, request).await?;
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn builder(verb: Verb, url: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    }
}

/// Send `request` and split non-success statuses into [`ApiError::Status`].
#[cfg(feature = "csr")]
async fn dispatch(
    path: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
    let resp = request.send().await.map_err(|e| {
        log::warn!("api: {path} unreachable: {e}");
        ApiError::Transport(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.message);
    log::warn!("api: {path} returned {status}");
    Err(ApiError::Status { status, message })
}
