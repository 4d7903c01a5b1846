//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (attach x-request-id)
//!     → auth guard (X-API-Key check, 401 on failure)
//!     → client_ip.rs (resolve the originating address)
//!     → handlers.rs (access log + JSON payload)
//! ```

pub mod client_ip;
pub mod handlers;
pub mod request;
pub mod server;

pub use request::UuidRequestId;
pub use server::HttpServer;
