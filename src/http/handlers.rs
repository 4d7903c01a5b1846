//! Handlers for the protected route.

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Uri};
use axum::Json;
use serde::Serialize;

use crate::http::client_ip::resolve_client_ip;

/// Response payload for the protected route.
#[derive(Debug, Serialize)]
pub struct AccessReport {
    pub message: &'static str,
    pub client_ip: String,
    pub path: String,
}

/// The single protected route.
///
/// Only reached once the auth guard has passed. Resolves the client
/// address, emits one informational access record, and echoes the result
/// back to the caller.
pub async fn secure_info(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    uri: Uri,
    headers: HeaderMap,
) -> Json<AccessReport> {
    let client_ip = resolve_client_ip(&headers, peer);
    let path = uri.path().to_string();

    tracing::info!(
        client_ip = %client_ip,
        path = %path,
        "Authorized request"
    );

    Json(AccessReport {
        message: "API Key OK & IP logged",
        client_ip,
        path,
    })
}
