//! Mapping of upstream failures to HTTP responses.
//!
//! Not-found never reaches this module: handlers answer it with `null` or `[]`.
//! Everything else is a server error, so a client never sees a 2xx with
//! partial data.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upstream(UpstreamError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(UpstreamError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Upstream(e) => match e {
                UpstreamError::Unreachable(_) => "UPSTREAM_UNREACHABLE",
                UpstreamError::Timeout => "UPSTREAM_TIMEOUT",
                UpstreamError::Fault { .. } => "UPSTREAM_FAULT",
                UpstreamError::Status(_) => "UPSTREAM_STATUS",
                UpstreamError::Malformed(_) => "UPSTREAM_MALFORMED",
                UpstreamError::Config(_) => "UPSTREAM_CONFIG",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, code = self.code(), error = %self, "Request failed");

        let body = ErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
