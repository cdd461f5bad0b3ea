// ABOUTME: Route module organization for FlexFit HTTP endpoints
// ABOUTME: Route definitions organized by domain with thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! Route module for the FlexFit recommendation server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to service layers. Every successful response uses
//! the `{ "success": true, "data": ... }` envelope; errors go through
//! [`crate::errors::AppError`]'s `IntoResponse` implementation.

/// Exercise catalog browsing and facet routes
pub mod exercises;
/// Health check and system status routes
pub mod health;
/// Workout recommendation routes
pub mod recommendations;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use recommendations::{RecommendationRequest, RecommendationRoutes};

use serde::Serialize;

/// JSON success envelope returned by every data-bearing endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true` for successful responses
    pub success: bool,
    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success envelope
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
