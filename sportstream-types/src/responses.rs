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

//! Response types for the edge functions.
//!
//! The sports relay has no response type of its own: it relays whatever JSON
//! the upstream provider returned as an opaque [`serde_json::Value`].

use serde::{Deserialize, Serialize};

/// Response payload for `POST /livekit-token` (200 OK).
///
/// # Example
///
/// ```json
/// { "token": "eyJhbGciOi...", "url": "wss://media.example.com", "roomName": "derby" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Signed bearer credential.
    pub token: String,
    /// Media server endpoint the caller should connect to.
    pub url: String,
    /// Echo of the requested room.
    pub room_name: String,
}
