// ABOUTME: External API client modules (exercise catalog backend)
// ABOUTME: Provides exercise catalog integration with normalization at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! External API Clients
//!
//! This module contains clients for external APIs used by the FlexFit
//! recommendation server.

pub mod exercise_db;

// Re-export commonly used types
pub use exercise_db::{ExerciseDbClient, ExerciseDbConfig};
