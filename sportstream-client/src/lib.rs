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

//! Cross-platform client for the sportstream edge functions.
//!
//! Works on WASM (browser), desktop, and mobile targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use sportstream_client::EdgeClient;
//! use sportstream_client::sportstream_types::TokenRequest;
//!
//! # async fn example() -> Result<(), sportstream_client::ClientError> {
//! let client = EdgeClient::new("https://project.functions.example/v1", None);
//!
//! let joined = client
//!     .request_token(&TokenRequest::new("derby", "Ana", "user-42"))
//!     .await?;
//! println!("connect to {} with {}", joined.url, joined.token);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod sports;
pub mod token;

pub use error::ClientError;
pub use sports::SportsCollection;
pub use sportstream_types;
pub use token::peek_claims;

use reqwest::Client;
use serde::de::DeserializeOwned;
use sportstream_types::ErrorResponse;

/// A typed client for the edge functions.
#[derive(Debug, Clone)]
pub struct EdgeClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl EdgeClient {
    /// Create a new client pointing at the functions base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8080"`
    /// * `api_key` - public gateway key, sent as `apikey` and as a bearer
    ///   token when the functions sit behind a hosted gateway
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: Client::new(),
        }
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    /// Build a POST request with auth applied.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder
                .header("apikey", key)
                .header(reqwest::header::AUTHORIZATION, format!("Bearer {key}")),
            None => builder,
        }
    }
}

/// Parse a JSON body on success, or map the `{ "error" }` body to [`ClientError`].
pub(crate) async fn parse_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    if (200..300).contains(&status) {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    log::warn!("edge function failed with {status}: {message}");
    Err(ClientError::Service { status, message })
}
