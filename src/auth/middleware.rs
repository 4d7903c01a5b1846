//! Request guard enforcing API key authentication.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::{AuthError, API_KEY_HEADER};
use crate::http::server::AppState;

/// Axum middleware that rejects requests lacking a valid `X-API-Key`
/// header before the handler runs.
///
/// On rejection the inner service is never polled: no client address is
/// resolved and no access log record is emitted.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let presented = match request.headers().get(API_KEY_HEADER) {
        None => None,
        // A value that is not visible ASCII cannot equal the secret.
        Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidKey)?),
    };

    state.validator.validate(presented)?;

    Ok(next.run(request).await)
}
