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

//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup and is immutable afterwards. A
//! function whose secrets are missing is not a startup failure: the service
//! still boots and that function answers every request with a 500, so a
//! half-configured deployment keeps serving the other function.

use std::env;
use std::time::Duration;

/// Upstream sports-data provider used when `SPORTS_API_BASE_URL` is unset.
pub const DEFAULT_SPORTS_BASE_URL: &str = "https://api.sportdb.dev";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SPORTS_TIMEOUT_SECS: u64 = 10;

/// Configuration for the edge service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// LiveKit credentials. `None` if any of the three variables is unset or empty.
    pub livekit: Option<LiveKitConfig>,
    /// Sports relay settings.
    pub sports: SportsConfig,
}

/// Secret material for signing media access tokens.
#[derive(Clone)]
pub struct LiveKitConfig {
    /// API key id; becomes the token issuer.
    pub api_key: String,
    /// HMAC signing secret.
    pub api_secret: String,
    /// Media server URL handed back to clients.
    pub url: String,
}

// Hand-written so the signing secret never ends up in a log line.
impl std::fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

/// Settings for the sports-data relay.
#[derive(Clone)]
pub struct SportsConfig {
    /// Server-held upstream key. `None` disables the relay.
    pub api_key: Option<String>,
    /// Upstream base URL, without a trailing slash.
    pub base_url: String,
    /// Timeout for the single upstream request.
    pub timeout: Duration,
}

impl std::fmt::Debug for SportsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SportsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SportsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SPORTS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SPORTS_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Token issuance (all three required to enable it)
    /// - `LIVEKIT_API_KEY`
    /// - `LIVEKIT_API_SECRET`
    /// - `LIVEKIT_URL`
    ///
    /// # Sports relay
    /// - `SPORTS_API_KEY` (required to enable it)
    /// - `SPORTS_API_BASE_URL` (default: `"https://api.sportdb.dev"`)
    /// - `SPORTS_API_TIMEOUT_SECS` (default: `"10"`)
    ///
    /// # Server
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values are
    /// treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let livekit = match (
            get("LIVEKIT_API_KEY"),
            get("LIVEKIT_API_SECRET"),
            get("LIVEKIT_URL"),
        ) {
            (Some(api_key), Some(api_secret), Some(url)) => Some(LiveKitConfig {
                api_key,
                api_secret,
                url,
            }),
            _ => None,
        };

        let timeout_secs = get("SPORTS_API_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| "SPORTS_API_TIMEOUT_SECS must be a valid integer".to_string())
            })
            .transpose()?
            .unwrap_or(DEFAULT_SPORTS_TIMEOUT_SECS);

        let sports = SportsConfig {
            api_key: get("SPORTS_API_KEY"),
            base_url: get("SPORTS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SPORTS_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            listen_addr,
            livekit,
            sports,
        })
    }

    /// Warn about functions that will refuse requests because of missing secrets.
    pub fn log_missing(&self) {
        if self.livekit.is_none() {
            tracing::warn!(
                "LIVEKIT_API_KEY, LIVEKIT_API_SECRET and LIVEKIT_URL must all be set; \
                 /livekit-token will answer 500"
            );
        }
        if self.sports.api_key.is_none() {
            tracing::warn!("SPORTS_API_KEY is not set; /sports-api will answer 500");
        }
    }
}
