//! Response construction.
//!
//! # Responsibilities
//! - Build the `text/plain` patch body response
//! - Map patch errors to HTTP status codes and short messages
//!
//! # Design Decisions
//! - Content-Length is left to the body so compression never contradicts it
//! - I/O detail of a failed resolution is logged, never sent to the client

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::patches::PatchError;

const TEXT_PLAIN: &str = "text/plain";

/// 200 response carrying concatenated patches.
pub fn patch_response(body: Bytes) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}

impl PatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PatchError::NotFound => StatusCode::NOT_FOUND,
            PatchError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            PatchError::Resolution(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PatchError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }

    /// Message sent to the client.
    pub fn client_message(&self) -> String {
        match self {
            PatchError::Resolution(_) => "Query failed.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for PatchError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            self.client_message(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patches::ResolveError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PatchError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PatchError::InvalidArgument("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PatchError::Resolution(ResolveError::Cancelled).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(PatchError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_messages() {
        assert_eq!(PatchError::NotFound.client_message(), "Not Found");
        assert_eq!(
            PatchError::InvalidArgument("abc".into()).client_message(),
            "Invalid argument 'abc'. Expected a UNIX timestamp."
        );
        assert_eq!(PatchError::Timeout.client_message(), "Timeout exceeded");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PatchError::Resolution(ResolveError::List {
            path: "/secret/patches".into(),
            source: io,
        });
        assert_eq!(err.client_message(), "Query failed.");
    }

    #[test]
    fn test_error_response_is_plain_text() {
        let response = PatchError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
    }
}
