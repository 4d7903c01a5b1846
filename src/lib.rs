//! Keygate: an API-key guarded endpoint that logs client IPs.
//!
//! # Data Flow
//! ```text
//! Client request (GET /)
//!     → http/server.rs (Axum setup, request ID, tracing, timeout)
//!     → auth (X-API-Key check, 401 on missing or invalid key)
//!     → http/client_ip.rs (X-Forwarded-For, peer address fallback)
//!     → http/handlers.rs (log client IP + path, JSON payload)
//! ```

pub mod auth;
pub mod config;
pub mod http;

pub use config::ServerConfig;
pub use http::HttpServer;
