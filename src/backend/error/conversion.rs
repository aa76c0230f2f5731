/**
 * Error Conversion
 *
 * The single boundary where errors become HTTP responses. Every error is
 * rendered as JSON:
 *
 * ```json
 * { "message": "Invalid Credentials" }
 * ```
 *
 * with the status code chosen by the check that failed. Internal errors are
 * logged here with their real cause and sent with a generic message.
 */

use axum::{
    http::Uri,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::Internal { message } = &self {
            tracing::error!("Request failed: {}", message);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

/// Fallback for unmatched routes
///
/// Answers `404 { "message": "Not Found - <path>" }`, path including any
/// query string.
pub async fn not_found(uri: Uri) -> BackendError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    BackendError::not_found(format!("Not Found - {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_includes_path_and_query() {
        let uri: Uri = "/api/nothing?x=1".parse().unwrap();
        let error = not_found(uri).await;
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Not Found - /api/nothing?x=1");
    }

    #[test]
    fn test_into_response_status() {
        let response = BackendError::unauthorized("Invalid Credentials").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
