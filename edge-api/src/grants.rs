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

//! Role policy: which capabilities a participant gets in a room.
//!
//! Host status implies publish, admin and room-create rights. Admin and
//! create are tied to the host flag alone, so `canPublish` can never be used
//! to gain them. Data publishing (reactions, signalling) is always granted.

use sportstream_types::{TokenRequest, VideoGrant};

/// The three role inputs of a token request, with omission defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantRole {
    pub is_host: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl Default for ParticipantRole {
    fn default() -> Self {
        Self {
            is_host: false,
            can_publish: false,
            can_subscribe: true,
        }
    }
}

impl ParticipantRole {
    pub fn from_request(request: &TokenRequest) -> Self {
        let defaults = Self::default();
        Self {
            is_host: request.is_host.unwrap_or(defaults.is_host),
            can_publish: request.can_publish.unwrap_or(defaults.can_publish),
            can_subscribe: request.can_subscribe.unwrap_or(defaults.can_subscribe),
        }
    }
}

/// Derive the room grant for `role`.
pub fn derive_grant(room: &str, role: ParticipantRole) -> VideoGrant {
    VideoGrant {
        room_join: true,
        room: room.to_string(),
        can_publish: role.is_host || role.can_publish,
        can_publish_data: true,
        can_subscribe: role.can_subscribe,
        room_admin: role.is_host,
        room_create: role.is_host,
    }
}
