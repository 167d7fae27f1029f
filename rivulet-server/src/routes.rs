// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! HTTP routes exposing rivulet producers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/flux` | JSON array `[1, 2, 3]` |
//! | `GET` | `/mono` | JSON string `"hello-world"`, or `204` when empty |
//! | `GET` | `/stream` | Endless NDJSON counter, one value per interval |
//!
//! Each request subscribes to a fresh producer. A failed producer answers
//! `500` with `{"error": "..."}`; a failure after `/stream` has started ends
//! the body instead.

use crate::config::ServerConfig;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use futures::StreamExt;
use rivulet::{channel_subscriber, Flux, ResultExt, RivuletError, Solo, StreamItem, Subscription};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Application state shared across all handlers.
pub type AppState = Arc<ServerConfig>;

/// Creates the router for all endpoints.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/flux", get(flux))
        .route("/mono", get(mono))
        .route("/stream", get(stream))
        .with_state(Arc::new(config))
}

/// The producer behind `/flux`.
pub fn numbers() -> Flux<i32> {
    Flux::from_values([1, 2, 3]).log("flux")
}

/// The producer behind `/mono`.
pub fn greeting() -> Solo<String> {
    Solo::single("hello-world".to_string()).log("mono")
}

/// The producer behind `/stream`.
pub fn ticks(period: Duration) -> Flux<u64> {
    Flux::interval(period).log("stream")
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, msg: impl Into<String>) -> impl IntoResponse {
    (status, Json(ErrorResponse { error: msg.into() }))
}

/// `GET /flux`: every value of [`numbers`] as one JSON array.
async fn flux() -> Response {
    list_response(&numbers(), "/flux").await
}

/// `GET /mono`: the value of [`greeting`] as JSON.
async fn mono() -> Response {
    single_response(&greeting(), "/mono").await
}

async fn list_response<T>(flux: &Flux<T>, route: &str) -> Response
where
    T: Serialize + Send + 'static,
{
    let outcome = flux.collect_list().resolve().await;
    match outcome.context(format!("collecting {route}")) {
        Ok(values) => Json(values.unwrap_or_default()).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

async fn single_response<T>(solo: &Solo<T>, route: &str) -> Response
where
    T: Serialize + Send + 'static,
{
    match solo.resolve().await.with_context(|| format!("resolving {route}")) {
        Ok(Some(value)) => Json(value).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// `GET /stream`: [`ticks`] as newline-delimited JSON, until the client leaves.
async fn stream(State(config): State<AppState>) -> Response {
    let (subscriber, rx) = channel_subscriber();
    let guard = CancelOnDrop(ticks(config.stream_interval).subscribe(subscriber));

    let body = rx.map(move |item: StreamItem<u64>| {
        let _subscription = &guard;
        Result::<_, RivuletError>::from(item).map(|tick| format!("{tick}\n"))
    });

    (
        [(header::CONTENT_TYPE, "application/x-ndjson")],
        Body::from_stream(body),
    )
        .into_response()
}

// Cancels the subscription once the response body is dropped.
struct CancelOnDrop(Subscription);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if self.0.cancel() {
            debug!("stream client disconnected, subscription cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn error_message(resp: Response) -> anyhow::Result<String> {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(value["error"].as_str().unwrap_or_default().to_string())
    }

    #[tokio::test]
    async fn failed_mapping_answers_500_with_route_context() -> anyhow::Result<()> {
        let flux = Flux::from_values(["1", "x"]).try_map(|raw| raw.parse::<u32>());

        let resp = list_response(&flux, "/flux").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let message = error_message(resp).await?;
        assert!(message.starts_with("Stream processing error: collecting /flux: "));
        assert!(message.contains("invalid digit"));

        Ok(())
    }

    #[tokio::test]
    async fn source_failure_keeps_its_message() -> anyhow::Result<()> {
        let solo = Solo::<String>::error(RivuletError::source_error("down"));

        let resp = single_response(&solo, "/mono").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_message(resp).await?, "Source error: down");

        Ok(())
    }

    #[tokio::test]
    async fn empty_solo_answers_no_content() -> anyhow::Result<()> {
        let resp = single_response(&Solo::<String>::empty(), "/mono").await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }
}
