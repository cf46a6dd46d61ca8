//! Index tracker: serves timestamped index patches over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /<timestamp>
//!     ───────────────▶ net listener ─▶ http server ─▶ compression ─▶ patch handler
//!                                                                      │
//!                                                      deadline guard  │ spawn
//!                                                                      ▼
//!                                                timestamp ─▶ directory resolver
//!                                                                      │
//!     ◀─────────────── 200 text/plain (gzip) / 400 / 404 / 408 / 500 ◀─┘
//! ```
//!
//! Patch files live in a single directory, named `<u64 timestamp>-<suffix>`.
//! They are written by another process; this service only reads them.

pub mod config;
pub mod http;
pub mod net;
pub mod patches;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::schema::TrackerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
