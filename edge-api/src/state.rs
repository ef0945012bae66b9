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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::{Config, LiveKitConfig, SportsConfig};

/// Application state shared across all request handlers.
///
/// Built once at startup; nothing in it changes while serving.
#[derive(Clone)]
pub struct AppState {
    /// LiveKit signing credentials. `None` disables token issuance.
    pub livekit: Option<LiveKitConfig>,
    /// Sports relay settings.
    pub sports: SportsConfig,
    /// HTTP client for the sports upstream (connection pool is shared).
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.sports.timeout)
            .build()?;
        Ok(Self {
            livekit: config.livekit.clone(),
            sports: config.sports.clone(),
            http,
        })
    }
}
