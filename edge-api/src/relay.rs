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

//! Sports-data relay: one GET to the upstream provider with the server-held
//! key injected, JSON relayed back untouched.

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::IgnoredAny;
use sportstream_types::requests::DEFAULT_SPORTS_PATH;

use crate::error::AppError;

/// Pick the upstream route: absent or empty selects the default listing.
///
/// Anything else must be an absolute path. Appending `@host` or `.host` to
/// the base URL would point the request, and the key, somewhere else.
pub fn resolve_path(path: Option<&str>) -> Result<&str, AppError> {
    match path.filter(|p| !p.is_empty()) {
        None => Ok(DEFAULT_SPORTS_PATH),
        Some(p) if p.starts_with('/') => Ok(p),
        Some(p) => Err(AppError::invalid_path(p)),
    }
}

pub fn upstream_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Check that an upstream body is JSON without re-encoding it.
pub fn ensure_json(body: &[u8]) -> Result<(), AppError> {
    serde_json::from_slice::<IgnoredAny>(body)
        .map(|_| ())
        .map_err(|e| {
            tracing::error!("Sports API returned invalid JSON: {e}");
            AppError::internal(&format!("invalid JSON from Sports API: {e}"))
        })
}

/// Fetch `path` from the upstream provider and return its body bytes as sent.
///
/// Fails with the upstream status on a non-success answer, and with a 500
/// when the request fails or the body is not JSON.
pub async fn fetch_upstream(
    http: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    path: &str,
) -> Result<Bytes, AppError> {
    let url = upstream_url(base_url, path);
    tracing::info!("Fetching from Sports API: {url}");

    let response = http
        .get(&url)
        .header(ACCEPT, "application/json")
        .header("X-API-Key", api_key)
        .header(AUTHORIZATION, format!("Bearer {api_key}"))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Sports API error: {status}");
        let status =
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Err(AppError::upstream(status));
    }

    let body = response.bytes().await?;
    ensure_json(&body)?;
    tracing::info!("Sports API response received for {path}");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_path_uses_default() {
        assert_eq!(resolve_path(None).unwrap(), "/api/flashscore/sports");
        assert_eq!(resolve_path(Some("")).unwrap(), "/api/flashscore/sports");
    }

    #[test]
    fn explicit_path_is_kept_verbatim() {
        assert_eq!(
            resolve_path(Some("/api/flashscore/leagues")).unwrap(),
            "/api/flashscore/leagues"
        );
    }

    #[test]
    fn relative_path_is_rejected() {
        let err = resolve_path(Some("@evil.example.com/steal")).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            upstream_url("https://api.sportdb.dev", "/api/flashscore/leagues"),
            "https://api.sportdb.dev/api/flashscore/leagues"
        );
        assert_eq!(
            upstream_url("http://localhost:9000/", "/x"),
            "http://localhost:9000/x"
        );
    }

    #[test]
    fn json_bodies_pass_untouched() {
        let body = br#"{"zeta":1,"alpha":2,"big":123456789012345678901234567890,"f":1.10}"#;
        assert!(ensure_json(body).is_ok());
        assert!(ensure_json(b"[]").is_ok());
    }

    #[test]
    fn non_json_body_is_an_internal_error() {
        let err = ensure_json(b"<html>maintenance</html>").unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body.error.starts_with("invalid JSON from Sports API"));
    }
}
