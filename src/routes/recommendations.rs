// ABOUTME: Workout recommendation route handlers
// ABOUTME: Validates criteria, extracts the requester identity, and delegates to the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! Workout recommendation routes
//!
//! `POST /api/recommendations` accepts the user's criteria and returns the
//! matched exercise list. Required-field validation happens before any
//! network call; the caller identity arrives in the `x-user-id` header
//! (populated by the upstream auth layer, which is outside this service) and
//! is used only as an opaque requester id.

use crate::errors::{AppError, AppResult};
use crate::models::{RecommendationCriteria, DEFAULT_EQUIPMENT};
use crate::routes::ApiResponse;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Incoming recommendation request body.
///
/// All fields are optional at the serde level so that missing required
/// fields produce this service's own 400 envelope instead of a generic
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Somatotype, required
    #[serde(rename = "bodyType")]
    pub body_type: Option<String>,
    /// Available equipment, optional (defaults to "body weight")
    pub equipment: Option<String>,
    /// Training goal, required
    pub goal: Option<String>,
    /// Experience level, required
    #[serde(rename = "fitnessLevel")]
    pub fitness_level: Option<String>,
}

impl RecommendationRequest {
    /// Validate and convert into typed criteria.
    ///
    /// # Errors
    ///
    /// Returns a 400-class error naming the first missing or unparsable
    /// field.
    pub fn validate(self) -> AppResult<RecommendationCriteria> {
        let body_type = self
            .body_type
            .ok_or_else(|| AppError::missing_field("bodyType"))?
            .parse()
            .map_err(AppError::invalid_input)?;

        let goal = self
            .goal
            .ok_or_else(|| AppError::missing_field("goal"))?
            .parse()
            .map_err(AppError::invalid_input)?;

        let fitness_level = self
            .fitness_level
            .ok_or_else(|| AppError::missing_field("fitnessLevel"))?
            .parse()
            .map_err(AppError::invalid_input)?;

        let equipment = self
            .equipment
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_EQUIPMENT.to_owned());

        Ok(RecommendationCriteria {
            body_type,
            equipment,
            goal,
            fitness_level,
        })
    }
}

/// Workout recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations", post(Self::handle_recommendations))
            .with_state(resources)
    }

    /// Handle a workout recommendation request
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<RecommendationRequest>,
    ) -> Result<Response, AppError> {
        let requester_id = headers
            .get("x-user-id")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("anonymous")
            .to_owned();

        // 400 before any network call
        let criteria = request.validate()?;

        let recommendations = resources
            .recommendations
            .get_recommendations(&criteria, &requester_id)
            .await?;

        Ok((StatusCode::OK, Json(ApiResponse::new(recommendations))).into_response())
    }
}
