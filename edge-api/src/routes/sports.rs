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

//! Handler for the sports-data relay.

use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use sportstream_types::SportsQuery;

use crate::error::AppError;
use crate::relay::{fetch_upstream, resolve_path};
use crate::state::AppState;

/// GET /sports-api?path=/api/flashscore/leagues
///
/// Relays the upstream JSON byte for byte. Upstream failures keep their
/// status. A missing key is reported before the path is checked and before
/// any outbound call.
pub async fn relay_sports(
    State(state): State<AppState>,
    Query(query): Query<SportsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(api_key) = state.sports.api_key.as_deref() else {
        tracing::error!("Missing SPORTS_API_KEY");
        return Err(AppError::sports_not_configured());
    };

    let path = resolve_path(query.path.as_deref())?;
    let body = fetch_upstream(&state.http, &state.sports.base_url, api_key, path).await?;
    Ok(([(CONTENT_TYPE, "application/json")], body))
}
