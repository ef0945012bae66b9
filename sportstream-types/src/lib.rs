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

//! Shared wire types for the sportstream edge functions.
//!
//! This crate defines the contract between the edge service (`edge-api`)
//! and its consumers (browser front end, `sportstream-client`, integration
//! tests). It is intentionally framework-agnostic: no axum, no HTTP client.

pub mod error;
pub mod requests;
pub mod responses;
pub mod token;

pub use error::ErrorResponse;
pub use requests::{SportsQuery, TokenRequest};
pub use responses::TokenResponse;
pub use token::{AccessTokenClaims, VideoGrant};
