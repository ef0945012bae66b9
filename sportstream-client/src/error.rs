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

//! Error types for the edge function client.

use thiserror::Error;

/// Errors returned by [`EdgeClient`](crate::EdgeClient) methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The function answered with a non-success status. `message` is the
    /// `error` field of the body when present, the raw body otherwise.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response or token that could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// 5xx answers signal a deployment or upstream problem rather than a bad request.
    pub fn is_server_side(&self) -> bool {
        matches!(self, ClientError::Service { status, .. } if *status >= 500)
    }
}
