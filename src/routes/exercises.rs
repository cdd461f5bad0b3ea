// ABOUTME: Exercise catalog route handlers for browsing and facet listing
// ABOUTME: Serves the cached normalized catalog with paging and derived facets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! Exercise catalog routes
//!
//! Paged listing of the normalized catalog plus the three derived facet
//! lists (body parts, equipment types, target muscles). All reads go through
//! the shared catalog cache; a catalog that has never been populated yields
//! a 503-class response rather than an empty success.

use crate::errors::AppError;
use crate::routes::ApiResponse;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Default page size for the exercise listing
const DEFAULT_LIMIT: u32 = 20;

/// Maximum accepted page size
const MAX_LIMIT: u32 = 200;

/// Query parameters for the paged exercise listing
#[derive(Debug, Deserialize, Default)]
struct PageQuery {
    #[serde(default)]
    limit: Option<u32>,
    #[serde(default)]
    offset: Option<u32>,
}

/// Exercise catalog routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises/body-parts", get(Self::handle_body_parts))
            .route("/api/exercises/equipment", get(Self::handle_equipment))
            .route("/api/exercises/targets", get(Self::handle_targets))
            .with_state(resources)
    }

    /// Handle paged exercise listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<PageQuery>,
    ) -> Result<Response, AppError> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(AppError::invalid_input(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        let offset = params.offset.unwrap_or(0) as usize;

        let snapshot = resources
            .cache
            .exercises(&resources.catalog_client)
            .await?;

        let page: Vec<_> = snapshot
            .iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok((StatusCode::OK, Json(ApiResponse::new(page))).into_response())
    }

    /// Handle body part facet listing
    async fn handle_body_parts(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let facets = resources
            .cache
            .body_parts(&resources.catalog_client)
            .await?;
        Ok((StatusCode::OK, Json(ApiResponse::new(facets))).into_response())
    }

    /// Handle equipment facet listing
    async fn handle_equipment(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let facets = resources
            .cache
            .equipment(&resources.catalog_client)
            .await?;
        Ok((StatusCode::OK, Json(ApiResponse::new(facets))).into_response())
    }

    /// Handle target muscle facet listing
    async fn handle_targets(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let facets = resources.cache.targets(&resources.catalog_client).await?;
        Ok((StatusCode::OK, Json(ApiResponse::new(facets))).into_response())
    }
}
