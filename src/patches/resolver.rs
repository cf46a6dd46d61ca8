//! Directory-backed patch resolution.
//!
//! The patch directory is the index: every filename starts with the numeric
//! timestamp of the patch it holds. A request scans the directory, keeps the
//! entries whose timestamp satisfies the configured comparison, and
//! concatenates their contents in listing order.
//!
//! # Design Decisions
//! - The directory is re-read on every request; nothing is cached
//! - Listing order is preserved, no sorting is applied
//! - Names without a numeric prefix are ignored, unreadable selections fail the request
//! - Cancellation is checked between entries and raced against each read

use std::path::PathBuf;

use bytes::{Bytes, BytesMut};
use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::config::{Comparison, PatchConfig};
use crate::patches::PatchSource;

/// Failure while scanning or reading the patch directory.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resolution cancelled")]
    Cancelled,

    #[error("resolution task aborted: {0}")]
    Aborted(String),
}

/// Extract the numeric timestamp prefix of a patch filename.
///
/// The prefix ends at the first `separator`; a name without one is read whole.
pub fn patch_timestamp(name: &str, separator: char) -> Option<u64> {
    let prefix = name.split(separator).next().unwrap_or(name);
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Resolves patches from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    directory: PathBuf,
    comparison: Comparison,
    separator: char,
}

impl DirectoryResolver {
    pub fn new(directory: impl Into<PathBuf>, comparison: Comparison, separator: char) -> Self {
        Self {
            directory: directory.into(),
            comparison,
            separator,
        }
    }

    pub fn from_config(config: &PatchConfig) -> Self {
        Self::new(config.directory.clone(), config.comparison, config.separator)
    }

    /// List the entries selected for `timestamp`, in listing order.
    pub async fn select(
        &self,
        timestamp: u64,
        cancel: &CancellationToken,
    ) -> Result<Vec<PathBuf>, ResolveError> {
        let list_err = |source| ResolveError::List {
            path: self.directory.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.directory).await.map_err(list_err)?;
        let mut selected = Vec::new();

        loop {
            let entry = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
                entry = entries.next_entry() => entry.map_err(list_err)?,
            };
            let Some(entry) = entry else { break };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::debug!(name = ?file_name, "Skipping non UTF-8 entry");
                continue;
            };

            match patch_timestamp(name, self.separator) {
                Some(stamp) if self.comparison.matches(stamp, timestamp) => {
                    selected.push(entry.path());
                }
                Some(_) => {}
                None => tracing::debug!(name, "Skipping entry without timestamp prefix"),
            }
        }

        Ok(selected)
    }

    /// Concatenate every patch newer than `timestamp` under the configured comparison.
    pub async fn resolve(
        &self,
        timestamp: u64,
        cancel: &CancellationToken,
    ) -> Result<Bytes, ResolveError> {
        let selected = self.select(timestamp, cancel).await?;
        let mut body = BytesMut::new();

        for path in &selected {
            if cancel.is_cancelled() {
                return Err(ResolveError::Cancelled);
            }

            let content = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
                read = tokio::fs::read(path) => read.map_err(|source| ResolveError::Read {
                    path: path.clone(),
                    source,
                })?,
            };
            body.extend_from_slice(&content);
        }

        tracing::debug!(
            timestamp,
            comparison = %self.comparison,
            patches = selected.len(),
            bytes = body.len(),
            "Resolved patches"
        );

        Ok(body.freeze())
    }
}

impl PatchSource for DirectoryResolver {
    fn load(
        &self,
        timestamp: u64,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<Bytes, ResolveError>> {
        let resolver = self.clone();
        Box::pin(async move { resolver.resolve(timestamp, &cancel).await })
    }
}
