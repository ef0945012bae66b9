/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{ "error": "<message>" }` paired with the HTTP
//! status of its failure class:
//!
//! | Class | Status |
//! |---|---|
//! | missing configuration | 500 |
//! | validation | 400 |
//! | upstream failure | upstream status |
//! | parse / signing / transport | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sportstream_types::ErrorResponse;

/// Application-level error that pairs an HTTP status code with an [`ErrorResponse`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(message),
        }
    }

    pub fn livekit_not_configured() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "LiveKit configuration is incomplete",
        )
    }

    pub fn sports_not_configured() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Sports API not configured")
    }

    pub fn missing_parameters() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Missing required parameters: roomName, participantName, participantIdentity",
        )
    }

    pub fn invalid_path(path: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid path '{path}': must start with '/'"),
        )
    }

    /// The upstream answered with a non-success status; relay that status.
    /// Codes without a reason phrase are reported by number.
    pub fn upstream(status: StatusCode) -> Self {
        let reason = match status.canonical_reason() {
            Some(reason) => reason.to_string(),
            None => status.as_u16().to_string(),
        };
        Self::new(status, format!("API error: {reason}"))
    }

    pub fn internal(detail: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.body.error)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Upstream request failed: {err}");
        Self::internal(&err.to_string())
    }
}
