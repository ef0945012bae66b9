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

//! Handler for issuing LiveKit access tokens.

use axum::{body::Bytes, extract::State, Json};
use sportstream_types::{TokenRequest, TokenResponse};

use crate::error::AppError;
use crate::grants::{derive_grant, ParticipantRole};
use crate::state::AppState;
use crate::token::issue_access_token;

/// A token request whose required fields are present and non-empty.
#[derive(Debug)]
struct JoinRequest {
    room_name: String,
    participant_name: String,
    participant_identity: String,
    role: ParticipantRole,
}

fn validate(request: TokenRequest) -> Result<JoinRequest, AppError> {
    let role = ParticipantRole::from_request(&request);
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

    match (
        non_empty(request.room_name),
        non_empty(request.participant_name),
        non_empty(request.participant_identity),
    ) {
        (Some(room_name), Some(participant_name), Some(participant_identity)) => Ok(JoinRequest {
            room_name,
            participant_name,
            participant_identity,
            role,
        }),
        _ => Err(AppError::missing_parameters()),
    }
}

/// POST /livekit-token
///
/// Issues a 4-hour access token scoped to one room. The body is parsed as
/// JSON whatever its `Content-Type`; a body that is not a JSON object is an
/// internal error (500), a missing or empty required field is a 400.
pub async fn issue_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, AppError> {
    let Some(credentials) = state.livekit.as_ref() else {
        tracing::error!("Missing LiveKit configuration");
        return Err(AppError::livekit_not_configured());
    };

    let request: TokenRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Error parsing token request: {e}");
        AppError::internal(&e.to_string())
    })?;

    let join = validate(request)?;

    tracing::info!(
        "Generating token for {} in room {}",
        join.participant_name,
        join.room_name
    );
    tracing::info!(
        "isHost: {}, canPublish: {}, canSubscribe: {}",
        join.role.is_host,
        join.role.can_publish,
        join.role.can_subscribe
    );

    let grant = derive_grant(&join.room_name, join.role);
    let token = issue_access_token(
        credentials,
        &join.participant_identity,
        &join.participant_name,
        grant,
    )?;

    tracing::info!("Token generated successfully");

    Ok(Json(TokenResponse {
        token,
        url: credentials.url.clone(),
        room_name: join.room_name,
    }))
}
