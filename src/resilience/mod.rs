//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Patch request:
//!     → timeouts.rs (spawn validate + resolve, race against the deadline)
//!     → result or 408
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every request has a deadline
//! - No retries: every failure is terminal for the request
//! - Abandoned work is cancelled, not left running

pub mod timeouts;

pub use timeouts::DeadlineGuard;
