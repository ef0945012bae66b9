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

//! Sports data through the edge relay.
//!
//! The upstream provider's schema is not stable, so listings are returned as
//! opaque JSON items. Only the envelope around the list is normalised.

use serde_json::Value;
use sportstream_types::SportsQuery;

use crate::{parse_json_response, ClientError, EdgeClient};

/// Listings shown on the sports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportsCollection {
    Sports,
    RecentEvents,
    UpcomingEvents,
    Leagues,
}

impl SportsCollection {
    /// Upstream route tried first.
    pub fn path(self) -> &'static str {
        match self {
            SportsCollection::Sports => "/api/flashscore/sports",
            SportsCollection::RecentEvents => "/api/flashscore/events/recent",
            SportsCollection::UpcomingEvents => "/api/flashscore/events/upcoming",
            SportsCollection::Leagues => "/api/flashscore/leagues",
        }
    }

    /// Route tried when the primary one fails.
    pub fn fallback_path(self) -> Option<&'static str> {
        match self {
            SportsCollection::RecentEvents => Some("/api/flashscore/results"),
            SportsCollection::UpcomingEvents => Some("/api/flashscore/fixtures"),
            SportsCollection::Sports | SportsCollection::Leagues => None,
        }
    }

    /// Envelope key the provider uses for this listing.
    fn key(self) -> &'static str {
        match self {
            SportsCollection::Sports => "sports",
            SportsCollection::RecentEvents | SportsCollection::UpcomingEvents => "events",
            SportsCollection::Leagues => "leagues",
        }
    }

    /// Extract the item list from a provider response.
    ///
    /// A bare array is the listing. Otherwise the first of `data`, the
    /// collection key and `results` holding a truthy value (in the JavaScript
    /// sense) is the envelope, and it must itself be an array; later keys are
    /// not consulted. Anything else is an empty listing.
    pub fn normalize(self, body: Value) -> Vec<Value> {
        match body {
            Value::Array(items) => items,
            Value::Object(mut map) => {
                let envelope = ["data", self.key(), "results"]
                    .into_iter()
                    .find_map(|key| map.remove(key).filter(is_truthy));
                match envelope {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl EdgeClient {
    /// Relay a GET to the sports provider and return its JSON untouched.
    ///
    /// `GET /sports-api?path=...`
    pub async fn fetch_sports(&self, path: Option<&str>) -> Result<Value, ClientError> {
        let query = SportsQuery {
            path: path.map(str::to_string),
        };
        let response = self.get("/sports-api").query(&query).send().await?;
        parse_json_response(response).await
    }

    /// Fetch one listing, trying its fallback route if the primary fails.
    pub async fn fetch_collection(
        &self,
        collection: SportsCollection,
    ) -> Result<Vec<Value>, ClientError> {
        let body = match self.fetch_sports(Some(collection.path())).await {
            Ok(body) => body,
            Err(err) => match collection.fallback_path() {
                Some(fallback) => {
                    log::warn!("{collection:?} unavailable ({err}), trying {fallback}");
                    self.fetch_sports(Some(fallback)).await?
                }
                None => return Err(err),
            },
        };
        Ok(collection.normalize(body))
    }
}
