//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → compression.rs (gzip when accepted)
//!     → patch.rs (validate + resolve under the deadline)
//!     → response.rs (status, content type)
//!     → Send to client
//! ```

pub mod compression;
pub mod patch;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
