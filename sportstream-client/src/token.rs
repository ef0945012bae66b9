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

//! Media access token requests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sportstream_types::{AccessTokenClaims, TokenRequest, TokenResponse};

use crate::{parse_json_response, ClientError, EdgeClient};

impl EdgeClient {
    /// Ask the edge service for a room access token.
    ///
    /// `POST /livekit-token`
    pub async fn request_token(&self, request: &TokenRequest) -> Result<TokenResponse, ClientError> {
        log::debug!(
            "requesting token for {:?} in room {:?}",
            request.participant_identity,
            request.room_name
        );
        let response = self.post("/livekit-token").json(request).send().await?;
        parse_json_response(response).await
    }
}

/// Read the claims of an access token WITHOUT verifying its signature.
///
/// Only the media server holds the secret; clients use this to drive UI
/// decisions such as showing host controls. Never use it for authorization.
pub fn peek_claims(token: &str) -> Result<AccessTokenClaims, ClientError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(ClientError::Decode("token is not a compact JWT".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClientError::Decode(format!("invalid claims encoding: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(format!("invalid claims: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportstream_types::VideoGrant;

    fn encode(value: &serde_json::Value) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).unwrap())
    }

    fn fake_token(claims: &serde_json::Value) -> String {
        let header = encode(&serde_json::json!({"alg": "HS256", "typ": "JWT"}));
        format!("{header}.{}.c2lnbmF0dXJl", encode(claims))
    }

    #[test]
    fn peeks_host_grant() {
        let token = fake_token(&serde_json::json!({
            "iss": "APIkey",
            "sub": "user-1",
            "name": "Ana",
            "iat": 100,
            "nbf": 100,
            "exp": 14_500,
            "video": {
                "roomJoin": true,
                "room": "derby",
                "canPublish": true,
                "canPublishData": true,
                "canSubscribe": true,
                "roomAdmin": true,
                "roomCreate": true
            }
        }));

        let claims = peek_claims(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, 14_400);
        assert_eq!(
            claims.video,
            VideoGrant {
                room_join: true,
                room: "derby".to_string(),
                can_publish: true,
                can_publish_data: true,
                can_subscribe: true,
                room_admin: true,
                room_create: true,
            }
        );
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(peek_claims("abc.def"), Err(ClientError::Decode(_))));
        assert!(matches!(peek_claims("a.b.c.d"), Err(ClientError::Decode(_))));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = format!("e30.{}.sig", URL_SAFE_NO_PAD.encode(b"not json"));
        assert!(matches!(peek_claims(&token), Err(ClientError::Decode(_))));
    }
}
