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

//! Access token validation.
//!
//! Performs the same checks the LiveKit media server applies when a client
//! presents a token: parse the JWT, verify the HMAC signature, check the
//! temporal claims and the issuer, and require `video.roomJoin == true`.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use sportstream_types::AccessTokenClaims;
use std::fmt;

/// Errors that can occur during access token validation.
#[derive(Debug)]
pub enum TokenError {
    /// Token could not be decoded, or its signature or issuer is wrong.
    Invalid(String),
    /// Token has expired (`exp` claim is in the past).
    Expired,
    /// Token is not valid yet (`nbf` claim is in the future).
    NotYetValid,
    /// The `roomJoin` grant is `false`.
    RoomJoinDenied,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Invalid(msg) => write!(f, "invalid token: {msg}"),
            TokenError::Expired => write!(f, "token has expired"),
            TokenError::NotYetValid => write!(f, "token is not valid yet"),
            TokenError::RoomJoinDenied => write!(f, "token does not grant room join permission"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Decode and validate an access token signed with `api_secret` by `api_key`.
///
/// Checks:
/// 1. Signature is valid (HMAC-SHA256)
/// 2. Token is not expired (`exp`) and already valid (`nbf`)
/// 3. Issuer matches `api_key`
/// 4. `video.roomJoin` is `true`
pub fn decode_access_token(
    api_key: &str,
    api_secret: &str,
    token: &str,
) -> Result<AccessTokenClaims, TokenError> {
    let decoding_key = DecodingKey::from_secret(api_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "nbf", "sub", "iss"]);
    validation.set_issuer(&[api_key]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data =
        jsonwebtoken::decode::<AccessTokenClaims>(token, &decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::Invalid(e.to_string()),
            },
        )?;

    let claims = token_data.claims;

    if !claims.video.room_join {
        return Err(TokenError::RoomJoinDenied);
    }

    Ok(claims)
}
