use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};

use crate::http::request::RequestIdExt;
use crate::http::response::patch_response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::patches::{parse_timestamp_path, PatchError};

/// `GET /<timestamp>`: every patch newer than the timestamp, concatenated.
pub async fn get_patches(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers.request_id().to_string();
    let path = uri.path().to_string();

    tracing::debug!(request_id = %request_id, path = %path, "Patch request");

    let source = state.source.clone();
    let log_path = path.clone();
    let outcome = state
        .guard
        .run(move |cancel| async move {
            let timestamp = parse_timestamp_path(&path)?;
            let body = source.load(timestamp, cancel).await?;
            Ok::<_, PatchError>(body)
        })
        .await;

    let response = match outcome {
        Ok(body) => {
            tracing::info!(
                request_id = %request_id,
                path = %log_path,
                bytes = body.len(),
                "Serving patches"
            );
            metrics::record_patch_body(body.len());
            patch_response(body)
        }
        Err(err) => {
            match &err {
                PatchError::Resolution(e) => {
                    tracing::error!(request_id = %request_id, path = %log_path, error = %e, "Query failed")
                }
                PatchError::Timeout => {
                    metrics::record_timeout();
                    tracing::warn!(request_id = %request_id, path = %log_path, "Request timed out")
                }
                _ => tracing::debug!(request_id = %request_id, path = %log_path, error = %err, "Rejected request"),
            }
            err.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start_time);
    response
}

/// `GET /health`
pub async fn health() -> &'static str {
    "API is healthy"
}
