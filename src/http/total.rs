//! The streaming sum endpoint.
//!
//! # Responsibilities
//! - Stream the request body chunk by chunk into an accumulator
//! - Enforce the configured body size limit
//! - Render the final outcome
//!
//! # Design Decisions
//! - Chunks are applied strictly in arrival order: each parse task is
//!   awaited before the next chunk is submitted
//! - The full payload is never buffered; memory use is bounded by the
//!   largest single chunk plus the pending token

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;

use crate::accumulator::Accumulator;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Handle `POST /total/`.
pub async fn sum_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers).to_string();
    let limit = state.limits.max_body_bytes;

    let mut stream = body.into_data_stream();
    let mut accumulator = Accumulator::new();
    let mut received: usize = 0;

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(request_id = %request_id, error = %error, "Request body read failed");
                metrics::record_request(StatusCode::BAD_REQUEST, start);
                return (StatusCode::BAD_REQUEST, "request body read failed").into_response();
            }
        };

        received = received.saturating_add(bytes.len());
        if limit > 0 && received > limit {
            tracing::warn!(
                request_id = %request_id,
                received,
                limit,
                "Request body exceeds size limit"
            );
            metrics::record_request(StatusCode::PAYLOAD_TOO_LARGE, start);
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }

        accumulator = match state
            .pool
            .run(move || {
                accumulator.process_chunk(&bytes);
                accumulator
            })
            .await
        {
            Ok(accumulator) => accumulator,
            Err(error) => {
                tracing::error!(request_id = %request_id, error = %error, "Parse task failed");
                metrics::record_request(StatusCode::INTERNAL_SERVER_ERROR, start);
                return (StatusCode::INTERNAL_SERVER_ERROR, "parse task failed").into_response();
            }
        };
    }

    let outcome = match state.pool.run(move || accumulator.finish()).await {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::error!(request_id = %request_id, error = %error, "Finalize task failed");
            metrics::record_request(StatusCode::INTERNAL_SERVER_ERROR, start);
            return (StatusCode::INTERNAL_SERVER_ERROR, "finalize task failed").into_response();
        }
    };

    metrics::record_bytes(received);
    metrics::record_request(outcome.status(), start);
    tracing::debug!(
        request_id = %request_id,
        bytes = received,
        status = %outcome.status(),
        "Stream finished"
    );

    outcome.into_response()
}
