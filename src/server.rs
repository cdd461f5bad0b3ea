// ABOUTME: Server resource container and HTTP serving loop
// ABOUTME: Builds shared resources once per process and assembles the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Server Assembly
//!
//! [`ServerResources`] owns the process-lifetime objects — the catalog
//! cache, the catalog client, and the recommendation service — constructed
//! once and shared by reference across all request handlers. The router
//! stacks tracing, CORS, and timeout middleware over the domain route
//! groups.

use crate::cache::CatalogCache;
use crate::config::ServerConfig;
use crate::external::ExerciseDbClient;
use crate::llm::{GeminiProvider, TextGenerator};
use crate::recommendation::{ExerciseNameGenerator, RecommendationService};
use crate::routes::{ExerciseRoutes, HealthRoutes, RecommendationRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Per-request timeout applied at the middleware layer
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-lifetime shared resources
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Exercise catalog client
    pub catalog_client: ExerciseDbClient,
    /// Shared catalog cache
    pub cache: Arc<CatalogCache>,
    /// Recommendation orchestration service
    pub recommendations: RecommendationService,
}

impl ServerResources {
    /// Build all shared resources from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let catalog_client = ExerciseDbClient::new(config.catalog.clone().into());
        let cache = Arc::new(CatalogCache::new(config.cache_ttl));

        let backend: Option<Arc<dyn TextGenerator>> = GeminiProvider::from_config(&config.gemini)
            .map(|provider| Arc::new(provider) as Arc<dyn TextGenerator>);
        if backend.is_none() {
            info!("No generative backend configured, recommendations use curated fallback lists");
        }

        let generator = ExerciseNameGenerator::new(backend);
        let recommendations =
            RecommendationService::new(generator, catalog_client.clone(), Arc::clone(&cache));

        Self {
            config,
            catalog_client,
            cache,
            recommendations,
        }
    }
}

/// Assemble the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ExerciseRoutes::routes(Arc::clone(&resources)))
        .merge(RecommendationRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// Bind and serve until shutdown
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// loop fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "FlexFit recommendation server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
