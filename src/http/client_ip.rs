//! Client address resolution.
//!
//! Behind a trusted reverse proxy the first `X-Forwarded-For` element is
//! the original client and the socket peer is the proxy itself; without a
//! proxy the peer address is the client. The header is attacker-supplied
//! unless an upstream proxy strips or overwrites it, so this is a
//! heuristic for logging, not a security boundary. That trust assumption
//! belongs to the deployment, not to this code.

use std::net::SocketAddr;

use axum::http::HeaderMap;

/// Name of the proxy-forwarding header.
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Resolve the client address for a request.
///
/// Takes the first comma-separated element of `X-Forwarded-For` with
/// surrounding whitespace stripped, accepting any string up to the first
/// comma. Falls back to the transport peer when the header is absent,
/// unreadable, or empty.
pub fn resolve_client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    if let Some(forwarded) = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or_default().trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    peer.ip().to_string()
}
