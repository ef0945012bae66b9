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

//! Axum router configuration for the edge service.

pub mod sports;
pub mod token;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the full application router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/livekit-token", post(token::issue_token))
        .route("/sports-api", get(sports::relay_sports))
}

/// Router with CORS applied and state attached, ready to serve.
pub fn app(state: AppState) -> Router {
    router().layer(cors_layer()).with_state(state)
}

/// Permissive CORS: the callers are browser clients on another origin.
///
/// The layer answers every `OPTIONS` request itself with an empty 200, so
/// bare probes and browser pre-flights get the same headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

async fn health() -> &'static str {
    "ok"
}
