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

//! Request types for the edge functions.
//!
//! These types are used by the server for deserialization and by clients
//! for serialization, so every field tolerates being absent on the wire.

use serde::{Deserialize, Serialize};

/// Upstream route used by the sports relay when no `path` is given.
pub const DEFAULT_SPORTS_PATH: &str = "/api/flashscore/sports";

/// Request body for `POST /livekit-token`.
///
/// The string fields are optional here so that a missing field surfaces as a
/// validation failure (400) rather than a parse failure. `participant_identity`
/// is trusted as given; nothing checks it against an authenticated session.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Room to join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    /// Display label shown to other participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_name: Option<String>,

    /// Unique-per-session participant id; becomes the token subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_identity: Option<String>,

    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_host: Option<bool>,

    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,

    /// Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
}

impl TokenRequest {
    /// A viewer request: no host rights, no publishing, subscribing allowed.
    pub fn new(
        room_name: impl Into<String>,
        participant_name: impl Into<String>,
        participant_identity: impl Into<String>,
    ) -> Self {
        Self {
            room_name: Some(room_name.into()),
            participant_name: Some(participant_name.into()),
            participant_identity: Some(participant_identity.into()),
            is_host: Some(false),
            can_publish: Some(false),
            can_subscribe: Some(true),
        }
    }

    pub fn as_host(mut self) -> Self {
        self.is_host = Some(true);
        self
    }

    pub fn with_publish(mut self, can_publish: bool) -> Self {
        self.can_publish = Some(can_publish);
        self
    }

    pub fn with_subscribe(mut self, can_subscribe: bool) -> Self {
        self.can_subscribe = Some(can_subscribe);
        self
    }
}

/// Query parameters for `GET /sports-api`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SportsQuery {
    /// Upstream route, e.g. `/api/flashscore/leagues`. Absent or empty
    /// selects [`DEFAULT_SPORTS_PATH`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_deserialize_as_none() {
        let req: TokenRequest = serde_json::from_str(r#"{"roomName":"final"}"#).unwrap();
        assert_eq!(req.room_name.as_deref(), Some("final"));
        assert!(req.participant_name.is_none());
        assert!(req.participant_identity.is_none());
        assert!(req.is_host.is_none());
        assert!(req.can_publish.is_none());
        assert!(req.can_subscribe.is_none());
    }

    #[test]
    fn null_flags_count_as_omitted() {
        let req: TokenRequest =
            serde_json::from_str(r#"{"isHost":null,"canSubscribe":null}"#).unwrap();
        assert!(req.is_host.is_none());
        assert!(req.can_subscribe.is_none());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let req = TokenRequest::new("derby", "Ana", "user-1").as_host();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["roomName"], "derby");
        assert_eq!(json["participantName"], "Ana");
        assert_eq!(json["participantIdentity"], "user-1");
        assert_eq!(json["isHost"], true);
        assert_eq!(json["canPublish"], false);
        assert_eq!(json["canSubscribe"], true);
    }

    #[test]
    fn empty_sports_query_has_no_path() {
        let query = SportsQuery::default();
        assert_eq!(serde_json::to_string(&query).unwrap(), "{}");
    }
}
