//! Request ID generation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Attach it as `x-request-id` before any other middleware runs
//!
//! # Design Decisions
//! - Request ID added as early as possible for log correlation

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Generates a fresh UUID v4 request ID for each incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
