//! Response compression.
//!
//! Bodies are gzip-encoded when the client lists gzip in `Accept-Encoding`
//! (q-values honoured), otherwise they pass through untouched. The encoding
//! header is set before the first body byte and the encoder is finished when
//! the body ends, whichever handler path produced it. Content-Length is
//! dropped from encoded responses.

use tower_http::compression::{predicate::SizeAbove, CompressionLayer};

use crate::config::CompressionConfig;

/// Gzip-only compression with no minimum body size.
pub fn compression_layer(config: &CompressionConfig) -> CompressionLayer<SizeAbove> {
    CompressionLayer::new()
        .gzip(config.enabled)
        .compress_when(SizeAbove::new(0))
}
