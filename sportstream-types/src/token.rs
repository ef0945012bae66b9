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

//! Media access token (JWT) claims.
//!
//! The access token is a signed JWT (HMAC-SHA256) that authorizes a client to
//! join one room on the LiveKit media server with a fixed set of capabilities.
//! The edge service signs it with the LiveKit API secret; the media server
//! validates the signature and reads the `video` grant.

use serde::{Deserialize, Serialize};

/// Lifetime of an issued token: 4 hours. There is no revocation, expiry is
/// the only way a token stops being accepted.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60 * 4;

/// Capabilities embedded in a token under the `video` claim.
///
/// Field names follow LiveKit's camelCase grant format.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_publish_data: bool,
    pub can_subscribe: bool,
    pub room_admin: bool,
    pub room_create: bool,
}

/// JWT payload for a media access token.
///
/// # Example payload
///
/// ```json
/// {
///   "iss": "APIxyz",
///   "sub": "user-42",
///   "name": "Ana",
///   "iat": 1707004800,
///   "nbf": 1707004800,
///   "exp": 1707019200,
///   "video": { "roomJoin": true, "room": "derby", "canPublish": false, ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// LiveKit API key id of the issuing service.
    pub iss: String,

    /// Participant identity.
    pub sub: String,

    /// Participant display name.
    pub name: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Not-before (Unix seconds). Equal to `iat`.
    pub nbf: i64,

    /// Expiration (Unix seconds). `iat + ACCESS_TOKEN_TTL_SECS`.
    pub exp: i64,

    pub video: VideoGrant,
}
