// ABOUTME: Exercise catalog API client for the third-party ExerciseDB backend
// ABOUTME: Implements paged exercise listing, facet endpoints, and boundary normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! Exercise Catalog API Client
//!
//! Client for the third-party exercise catalog (`ExerciseDB` via `RapidAPI`).
//! The upstream is large, slow, and loosely shaped: fields go missing or get
//! renamed between catalog revisions, response envelopes sometimes nest the
//! array under a `data` field and sometimes return it bare, and ids may
//! arrive as numbers. This client is the single normalization boundary — no
//! untrusted record shape escapes it.
//!
//! Failure semantics follow the two-tier contract: the primary exercise-list
//! fetch surfaces a distinguishable unavailability error so callers can map
//! it to a 503-class condition, while the facet list endpoints fail open to
//! an empty list.

use crate::config::CatalogConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseRecord, RawExercise};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Service name used in error messages and logs
const SERVICE_NAME: &str = "Exercise catalog";

/// Exercise catalog client configuration
#[derive(Debug, Clone)]
pub struct ExerciseDbConfig {
    /// Base URL for the catalog API
    pub base_url: String,
    /// `RapidAPI` key; empty means unauthenticated (local mock upstreams)
    pub api_key: String,
    /// `RapidAPI` host header value
    pub api_host: String,
    /// Per-call timeout
    pub timeout: Duration,
}

impl Default for ExerciseDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://exercisedb.p.rapidapi.com".to_owned(),
            api_key: String::new(),
            api_host: "exercisedb.p.rapidapi.com".to_owned(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl From<CatalogConfig> for ExerciseDbConfig {
    fn from(config: CatalogConfig) -> Self {
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
            api_host: config.api_host,
            timeout: config.timeout,
        }
    }
}

/// Upstream list envelope: either a bare array or nested under `data`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Exercise catalog API client
#[derive(Debug, Clone)]
pub struct ExerciseDbClient {
    config: ExerciseDbConfig,
    http_client: Client,
}

impl ExerciseDbClient {
    /// Create a new catalog client
    #[must_use]
    pub fn new(config: ExerciseDbConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            config,
            http_client,
        }
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let mut builder = self.http_client.get(url);
        if !self.config.api_key.is_empty() {
            builder = builder
                .header("X-RapidAPI-Key", &self.config.api_key)
                .header("X-RapidAPI-Host", &self.config.api_host);
        }
        builder
    }

    /// Fetch a page of the exercise catalog, normalized.
    ///
    /// Synthesized ids are seeded from `offset` so they stay unique within a
    /// snapshot assembled from consecutive pages.
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` on any transport, status, or
    /// parse failure — the caller decides whether a cached snapshot can
    /// absorb it.
    #[instrument(skip(self))]
    pub async fn list_exercises(&self, limit: u32, offset: u32) -> AppResult<Vec<ExerciseRecord>> {
        let response = self
            .request("/exercises")
            .query(&[("limit", limit.to_string()), ("offset", offset.to_string())])
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SERVICE_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_unavailable(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        let envelope: ListEnvelope<RawExercise> = response.json().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let exercises: Vec<ExerciseRecord> = envelope
            .into_items()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.normalize(offset as usize + i))
            .collect();

        debug!(count = exercises.len(), "Fetched exercise catalog page");
        Ok(exercises)
    }

    /// Fetch the upstream body part list. Fails open to an empty list.
    #[instrument(skip(self))]
    pub async fn body_part_list(&self) -> Vec<String> {
        self.facet_list("/exercises/bodyPartList").await
    }

    /// Fetch the upstream equipment list. Fails open to an empty list.
    #[instrument(skip(self))]
    pub async fn equipment_list(&self) -> Vec<String> {
        self.facet_list("/exercises/equipmentList").await
    }

    /// Fetch the upstream target muscle list. Fails open to an empty list.
    #[instrument(skip(self))]
    pub async fn target_list(&self) -> Vec<String> {
        self.facet_list("/exercises/targetList").await
    }

    /// Shared facet fetch: any failure yields an empty list, never an error
    async fn facet_list(&self, path: &str) -> Vec<String> {
        let response = match self.request(path).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(path, error = %e, "Facet list fetch failed, returning empty");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(path, status = %response.status(), "Facet list fetch returned error status");
            return Vec::new();
        }

        match response.json::<ListEnvelope<String>>().await {
            Ok(envelope) => envelope
                .into_items()
                .into_iter()
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .collect(),
            Err(e) => {
                warn!(path, error = %e, "Facet list parse failed, returning empty");
                Vec::new()
            }
        }
    }
}
