//! Response rendering for the sum endpoint.
//!
//! # Responsibilities
//! - Map an accumulation outcome to an HTTP status and JSON body
//! - Keep the client-facing messages stable
//!
//! # Design Decisions
//! - Error responses carry no `total` key; the sum is discarded
//! - An unclosed list is a degraded success: best-effort total plus warning

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::accumulator::Outcome;

/// Client-facing message for any structural or numeric failure.
pub const INVALID_FORMAT_MESSAGE: &str =
    "input format must be a list of integers in json format";

/// Client-facing warning when the closing bracket never arrived.
pub const MISSING_BRACKET_WARNING: &str =
    "input format must be a list of integers in json format, missing closing bracket";

#[derive(Debug, Serialize)]
struct TotalBody {
    total: i64,
}

#[derive(Debug, Serialize)]
struct WarningBody {
    total: i64,
    warning: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl Outcome {
    /// Status code this outcome renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Complete { .. } => StatusCode::CREATED,
            Outcome::Unterminated { .. } | Outcome::Invalid { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Outcome::Complete { total } => (status, Json(TotalBody { total })).into_response(),
            Outcome::Unterminated { total } => (
                status,
                Json(WarningBody {
                    total,
                    warning: MISSING_BRACKET_WARNING,
                }),
            )
                .into_response(),
            Outcome::Invalid { error } => {
                tracing::debug!(reason = %error, "Rejecting malformed request body");
                (
                    status,
                    Json(ErrorBody {
                        error: INVALID_FORMAT_MESSAGE,
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::FormatError;
    use serde_json::Value;

    async fn body_of(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn complete_renders_created_with_total() {
        let response = Outcome::Complete { total: 5050 }.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_of(response).await;
        assert_eq!(body["total"], 5050);
        assert!(body.get("warning").is_none());
    }

    #[tokio::test]
    async fn unterminated_renders_total_and_warning() {
        let response = Outcome::Unterminated { total: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body["total"], 10);
        assert_eq!(body["warning"], MISSING_BRACKET_WARNING);
    }

    #[tokio::test]
    async fn invalid_renders_error_without_total() {
        let response = Outcome::Invalid {
            error: FormatError::InvalidToken,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body["error"], INVALID_FORMAT_MESSAGE);
        assert!(body.get("total").is_none());
    }
}
