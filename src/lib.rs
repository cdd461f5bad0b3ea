// ABOUTME: Main library entry point for the FlexFit recommendation server
// ABOUTME: Exposes the workout recommendation engine and its HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

#![deny(unsafe_code)]

//! # FlexFit Recommendation Server
//!
//! The workout recommendation engine behind the FlexFit fitness app. It
//! reconciles free-form exercise name suggestions from a generative-text
//! backend against a large third-party exercise catalog, applies the user's
//! equipment preference, and backfills deficient results so callers always
//! receive a usable-sized workout plan.
//!
//! ## Architecture
//!
//! - **External**: exercise catalog client with normalization at the boundary
//! - **Cache**: process-lifetime catalog snapshot with TTL and stale-serving
//! - **LLM**: optional Gemini backend behind the `TextGenerator` trait
//! - **Recommendation**: name generator, matcher/backfill engine, orchestrator
//! - **Routes**: axum HTTP surface with a uniform response envelope
//!
//! ## Example
//!
//! ```rust,no_run
//! use flexfit_server::config::ServerConfig;
//! use flexfit_server::server::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     flexfit_server::server::run(resources).await
//! }
//! ```

/// In-memory catalog cache with TTL and stale-serving refresh policy
pub mod cache;

/// Environment-driven server configuration
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External API clients (exercise catalog)
pub mod external;

/// Generative-text provider abstraction (Gemini)
pub mod llm;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models (exercise records, recommendation criteria)
pub mod models;

/// Workout recommendation engine (generator, matcher, orchestrator)
pub mod recommendation;

/// HTTP route definitions organized by domain
pub mod routes;

/// Server resource container and serving loop
pub mod server;
