// ABOUTME: Workout recommendation orchestration combining generator, catalog, and matcher
// ABOUTME: Defines RecommendationService used by the HTTP recommendation routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Workout Recommendation Engine
//!
//! Orchestrates the recommendation pipeline: the generator produces candidate
//! exercise name strings (generative backend or curated fallback) while the
//! catalog snapshot is obtained through the cache; the matcher then
//! reconciles the two into the final exercise list. The two upstream
//! operations have no ordering dependency and are issued concurrently.

/// Candidate exercise name generation (generative + fallback tables)
pub mod generator;
/// Exercise matching and backfill engine
pub mod matcher;

pub use generator::ExerciseNameGenerator;
pub use matcher::match_exercises;

use crate::cache::CatalogCache;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::ExerciseDbClient;
use crate::models::{ExerciseRecord, RecommendationCriteria};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Generic message returned when the orchestration chain fails unexpectedly
const GENERATION_FAILED_MESSAGE: &str = "Failed to generate workout recommendations";

/// Orchestrates workout recommendation requests.
///
/// Stateless across requests apart from the shared catalog cache; each call
/// operates on an immutable snapshot.
pub struct RecommendationService {
    generator: ExerciseNameGenerator,
    catalog_client: ExerciseDbClient,
    cache: Arc<CatalogCache>,
}

impl RecommendationService {
    /// Create a recommendation service over the shared cache and catalog client
    #[must_use]
    pub fn new(
        generator: ExerciseNameGenerator,
        catalog_client: ExerciseDbClient,
        cache: Arc<CatalogCache>,
    ) -> Self {
        Self {
            generator,
            catalog_client,
            cache,
        }
    }

    /// Produce the recommended exercise list for the given criteria.
    ///
    /// `requester_id` is an opaque pass-through from the auth layer, accepted
    /// for auditing; it does not alter matching.
    ///
    /// # Errors
    ///
    /// Returns a 503-class error when the catalog has never been populated
    /// and cannot be fetched; any other failure in the chain surfaces as a
    /// single generic internal error. Partial results are never returned.
    #[instrument(skip(self, criteria), fields(requester = %requester_id))]
    pub async fn get_recommendations(
        &self,
        criteria: &RecommendationCriteria,
        requester_id: &str,
    ) -> AppResult<Vec<ExerciseRecord>> {
        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            goal = %criteria.goal,
            equipment = %criteria.equipment,
            fitness_level = %criteria.fitness_level,
            "Generating workout recommendations"
        );

        // Independent network operations; the matcher needs both
        let (names, catalog) = tokio::join!(
            self.generator.generate(criteria),
            self.cache.exercises(&self.catalog_client),
        );

        let catalog = catalog.map_err(|err| match err.code {
            // No catalog and no cached fallback: distinguishable 503-class
            ErrorCode::ResourceUnavailable
            | ErrorCode::ExternalServiceUnavailable
            | ErrorCode::ExternalRateLimited => err,
            _ => {
                error!(%request_id, error = %err, "Recommendation orchestration failed");
                AppError::internal(GENERATION_FAILED_MESSAGE).with_source(err)
            }
        })?;

        let recommendations = match_exercises(&names, &catalog, &criteria.equipment);

        info!(
            %request_id,
            suggested = names.len(),
            matched = recommendations.len(),
            "Workout recommendations assembled"
        );

        Ok(recommendations)
    }
}
