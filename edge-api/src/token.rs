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

//! LiveKit access token generation.
//!
//! Tokens are signed with the LiveKit API secret (HS256) and carry the API
//! key as issuer, so the media server can pick the matching secret and
//! verify them. Nothing is stored: a token lives until its `exp`.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sportstream_types::token::ACCESS_TOKEN_TTL_SECS;
use sportstream_types::{AccessTokenClaims, VideoGrant};

use crate::config::LiveKitConfig;
use crate::error::AppError;

/// Sign an access token for `identity` as of `issued_at` (Unix seconds).
pub fn generate_access_token(
    credentials: &LiveKitConfig,
    identity: &str,
    name: &str,
    grant: VideoGrant,
    issued_at: i64,
) -> Result<String, AppError> {
    let claims = AccessTokenClaims {
        iss: credentials.api_key.clone(),
        sub: identity.to_string(),
        name: name.to_string(),
        iat: issued_at,
        nbf: issued_at,
        exp: issued_at + ACCESS_TOKEN_TTL_SECS,
        video: grant,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(credentials.api_secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign access token: {e}");
        AppError::internal(&format!("failed to sign access token: {e}"))
    })
}

/// Sign an access token issued now.
pub fn issue_access_token(
    credentials: &LiveKitConfig,
    identity: &str,
    name: &str,
    grant: VideoGrant,
) -> Result<String, AppError> {
    generate_access_token(credentials, identity, name, grant, Utc::now().timestamp())
}
