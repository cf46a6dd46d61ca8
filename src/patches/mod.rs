//! Patch selection subsystem.
//!
//! # Data Flow
//! ```text
//! GET /<timestamp>
//!     → timestamp.rs (path shape, u64 parse)
//!     → PatchSource (resolver.rs scans the patch directory)
//!     → concatenated bytes
//! ```
//!
//! # Error Taxonomy
//! - NotFound: path is not a single non-empty segment (404)
//! - InvalidArgument: segment is not an unsigned 64-bit decimal (400)
//! - Resolution: directory listing or a file read failed (500)
//! - Timeout: the request deadline elapsed first (408)

pub mod resolver;
pub mod timestamp;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

pub use resolver::{patch_timestamp, DirectoryResolver, ResolveError};
pub use timestamp::{parse_timestamp, parse_timestamp_path};

/// Terminal outcome of a failed patch request.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Not Found")]
    NotFound,

    #[error("Invalid argument '{0}'. Expected a UNIX timestamp.")]
    InvalidArgument(String),

    #[error("Query failed: {0}")]
    Resolution(#[from] ResolveError),

    #[error("Timeout exceeded")]
    Timeout,
}

/// Something that can produce the concatenated patches for a timestamp.
///
/// The returned future owns its state so it can run as a detached task; it
/// should stop early once `cancel` fires.
pub trait PatchSource: Send + Sync + 'static {
    fn load(
        &self,
        timestamp: u64,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Bytes, ResolveError>>;
}
