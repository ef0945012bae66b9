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

//! Integration tests for `POST /livekit-token`.
//!
//! Issued tokens are verified with the same checks the media server applies
//! (`edge_api::token_validator`), so these tests cover the full contract:
//! response shape, grant policy, temporal claims and signature.


use axum::body::Body;
use axum::http::{self, StatusCode};
use chrono::Utc;
use edge_api::config::SportsConfig;
use edge_api::token_validator::decode_access_token;
use sportstream_types::{AccessTokenClaims, ErrorResponse, TokenResponse, VideoGrant};
use test_helpers::*;
use tower::ServiceExt;

const MISSING_PARAMETERS: &str =
    "Missing required parameters: roomName, participantName, participantIdentity";

fn verify(token: &str) -> AccessTokenClaims {
    decode_access_token(TEST_API_KEY, TEST_API_SECRET, token).expect("issued token should verify")
}

async fn issue(body: &str) -> TokenResponse {
    let resp = token_app().oneshot(post_token(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    response_json(resp).await
}

// ── Success ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_viewer_gets_view_only_token() {
    let before = Utc::now().timestamp();
    let body = issue(
        r#"{"roomName":"derby-2025","participantName":"Ana","participantIdentity":"user-1"}"#,
    )
    .await;
    let after = Utc::now().timestamp();

    assert_eq!(body.url, TEST_LIVEKIT_URL);
    assert_eq!(body.room_name, "derby-2025");

    let claims = verify(&body.token);
    assert_eq!(claims.iss, TEST_API_KEY);
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.name, "Ana");
    assert_eq!(
        claims.video,
        VideoGrant {
            room_join: true,
            room: "derby-2025".to_string(),
            can_publish: false,
            can_publish_data: true,
            can_subscribe: true,
            room_admin: false,
            room_create: false,
        }
    );

    assert!(claims.iat >= before && claims.iat <= after);
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.exp, claims.iat + 14_400);
}

#[tokio::test]
async fn test_host_gets_publish_and_admin_rights() {
    let body = issue(
        r#"{"roomName":"final","participantName":"Host","participantIdentity":"host-1",
            "isHost":true,"canPublish":false}"#,
    )
    .await;

    let grant = verify(&body.token).video;
    assert!(grant.can_publish);
    assert!(grant.room_admin);
    assert!(grant.room_create);
    assert!(grant.can_publish_data);
}

#[tokio::test]
async fn test_publisher_without_host_flag_gets_no_admin_rights() {
    let body = issue(
        r#"{"roomName":"final","participantName":"Cam 2","participantIdentity":"cam-2",
            "canPublish":true,"canSubscribe":false}"#,
    )
    .await;

    let grant = verify(&body.token).video;
    assert!(grant.can_publish);
    assert!(!grant.can_subscribe);
    assert!(!grant.room_admin);
    assert!(!grant.room_create);
}

#[tokio::test]
async fn test_identical_requests_give_independently_valid_tokens() {
    let request = r#"{"roomName":"derby","participantName":"Ana","participantIdentity":"user-1"}"#;
    let first = issue(request).await;
    let second = issue(request).await;

    assert_eq!(verify(&first.token).video, verify(&second.token).video);
}

#[tokio::test]
async fn test_body_is_parsed_without_content_type() {
    let req = http::Request::builder()
        .method("POST")
        .uri("/livekit-token")
        .body(Body::from(
            r#"{"roomName":"derby","participantName":"Ana","participantIdentity":"user-1"}"#,
        ))
        .unwrap();

    let resp = token_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ── Validation ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_incomplete_requests_are_rejected() {
    let bodies = [
        "{}",
        r#"{"participantName":"Ana","participantIdentity":"user-1"}"#,
        r#"{"roomName":"derby","participantIdentity":"user-1"}"#,
        r#"{"roomName":"derby","participantName":"Ana"}"#,
        r#"{"roomName":"","participantName":"Ana","participantIdentity":"user-1"}"#,
        r#"{"roomName":"derby","participantName":"","participantIdentity":"user-1"}"#,
        r#"{"roomName":"derby","participantName":"Ana","participantIdentity":""}"#,
        r#"{"roomName":null,"participantName":"Ana","participantIdentity":"user-1"}"#,
    ];

    for body in bodies {
        let resp = token_app().oneshot(post_token(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{body}");

        let err: ErrorResponse = response_json(resp).await;
        assert_eq!(err.error, MISSING_PARAMETERS, "{body}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_internal_error() {
    let resp = token_app().oneshot(post_token("{not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = response_json(resp).await;
    assert!(!err.error.is_empty());
}

// ── Configuration ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_configuration_is_a_500() {
    let app = build_app(None, SportsConfig::default());
    let resp = app
        .oneshot(post_token(
            r#"{"roomName":"derby","participantName":"Ana","participantIdentity":"user-1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = response_json(resp).await;
    assert_eq!(err.error, "LiveKit configuration is incomplete");
}

#[tokio::test]
async fn test_configuration_is_checked_before_the_body() {
    let app = build_app(None, SportsConfig::default());
    let resp = app.oneshot(post_token("{}")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_never_leaks_the_secret() {
    let resp = token_app().oneshot(post_token("[1, 2")).await.unwrap();
    let err: ErrorResponse = response_json(resp).await;
    assert!(!err.error.contains(TEST_API_SECRET));
}
