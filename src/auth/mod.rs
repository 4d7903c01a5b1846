//! API key authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → middleware.rs (extract X-API-Key header)
//!     → validator.rs (classify: missing / invalid / valid)
//!     → valid: pass through to the handler
//!     → otherwise: 401 with a JSON detail body, handler never runs
//! ```
//!
//! # Design Decisions
//! - The secret is injected at construction, never read from ambient state
//! - Rejected requests produce no log record (only authorized ones do)
//! - Plain byte equality; no constant-time guarantee

pub mod middleware;
pub mod validator;

pub use middleware::require_api_key;
pub use validator::{ApiKeyValidator, API_KEY_HEADER};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Authentication failure, surfaced to the client as a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The key header was not sent at all.
    #[error("API Key required")]
    MissingKey,

    /// A key was presented but does not match the configured secret.
    #[error("Invalid API Key")]
    InvalidKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
