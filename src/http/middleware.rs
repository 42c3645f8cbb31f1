//! Per-request middleware: metrics and the inbound deadline.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::{Duration, Instant};

use crate::http::error::ApiError;
use crate::observability::metrics;
use crate::upstream::UpstreamError;

/// Record method, matched route template and status of every routed request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    metrics::record_request(&method, &route, response.status().as_u16(), start_time);
    response
}

/// Bound the whole request by `limit`.
///
/// Without an upstream timeout this is what ends a stalled upstream call, so
/// a lapsed deadline is reported as an upstream timeout.
pub async fn request_deadline(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(path = %path, limit_secs = limit.as_secs(), "Request deadline exceeded");
            ApiError::from(UpstreamError::Timeout).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{self, StatusCode}, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(delay: Duration) -> Router {
        Router::new()
            .route(
                "/slow",
                get(move || async move {
                    tokio::time::sleep(delay).await;
                    "done"
                }),
            )
            .layer(middleware::from_fn_with_state(
                Duration::from_millis(50),
                request_deadline,
            ))
    }

    #[tokio::test]
    async fn test_lapsed_deadline_is_gateway_timeout() {
        let response = app(Duration::from_secs(5))
            .oneshot(http::Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let response = app(Duration::ZERO)
            .oneshot(http::Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
