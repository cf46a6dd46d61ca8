//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the tracker.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the index tracker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TrackerConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Patch directory and selection settings.
    pub patches: PatchConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Response compression settings.
    pub compression: CompressionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// The `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6150,
        }
    }
}

/// How a patch's timestamp is compared against the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Select patches strictly newer than the request (`>`).
    #[default]
    Strict,
    /// Select patches at or after the request (`>=`).
    Inclusive,
}

impl Comparison {
    /// Apply the comparison: does a patch stamped `patch` satisfy a request for `requested`?
    pub fn matches(self, patch: u64, requested: u64) -> bool {
        match self {
            Comparison::Strict => patch > requested,
            Comparison::Inclusive => patch >= requested,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Strict => write!(f, ">"),
            Comparison::Inclusive => write!(f, ">="),
        }
    }
}

/// Patch directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Directory holding the patch files. Required.
    pub directory: PathBuf,

    /// Timestamp comparison applied to every request.
    pub comparison: Comparison,

    /// Character ending the numeric timestamp prefix of a filename.
    pub separator: char,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            comparison: Comparison::Strict,
            separator: '-',
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Deadline for resolving a single patch request, in seconds.
    pub request_secs: u64,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 5 }
    }
}

/// Response compression configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Gzip responses for clients that accept it.
    pub enabled: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "index_tracker=info,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9150".to_string(),
        }
    }
}
