//! Session API: the remote operations the dashboard shell depends on.
//!
//! The transport owns the session credential (a cookie set by login); callers
//! only observe outcomes.

pub mod client;

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::HttpSessionApi;

pub const VERIFY_PATH: &str = "/api/auth/verify/";
pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("session is not authorized")]
    Unauthorized,
    #[error("request rejected with status {status}")]
    Rejected { status: u16 },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("{0}")]
    Invalid(String),
}

impl AuthError {
    /// Maps a non-success HTTP status to an error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            status => Self::Rejected { status },
        }
    }
}

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body returned by the verify endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub username: Option<String>,
}

/// Remote session operations.
///
/// Object-safe so the shell can hold any implementation behind an `Arc`.
pub trait SessionApi: Send + Sync {
    fn verify(&self) -> BoxFuture<'_, Result<VerifyResponse, AuthError>>;

    fn login<'a>(&'a self, credentials: &'a Credentials) -> BoxFuture<'a, Result<(), AuthError>>;

    fn logout(&self) -> BoxFuture<'_, Result<(), AuthError>>;
}
