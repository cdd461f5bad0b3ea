// ABOUTME: Recommendation generator producing candidate exercise name strings
// ABOUTME: Generative-text prompt path with curated per-goal fallback tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Recommendation Generator
//!
//! Produces the list of candidate exercise *name strings* the matcher
//! reconciles against the catalog. Two paths:
//!
//! 1. Generative: a single prompt embedding the user's criteria, asking the
//!    backend for ONLY a comma-separated list of 8-10 exercise names.
//! 2. Curated fallback: a fixed table of 10 names per goal, used whenever
//!    the backend is unconfigured, errors, or returns unusable text.
//!
//! The degraded path is expected, not exceptional: this component always
//! returns a non-empty list and never surfaces a failure.

use crate::llm::TextGenerator;
use crate::models::{FitnessGoal, RecommendationCriteria};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Curated fallback lists, 10 exercises per goal
const WEIGHT_LOSS_EXERCISES: [&str; 10] = [
    "Burpees",
    "Mountain Climbers",
    "Jumping Jacks",
    "High Knees",
    "Jump Squats",
    "Lunges",
    "Push Ups",
    "Plank",
    "Kettlebell Swings",
    "Jump Rope",
];

const MUSCLE_GAIN_EXERCISES: [&str; 10] = [
    "Bench Press",
    "Squats",
    "Deadlifts",
    "Pull Ups",
    "Shoulder Press",
    "Barbell Rows",
    "Bicep Curls",
    "Tricep Dips",
    "Leg Press",
    "Incline Press",
];

const ENDURANCE_EXERCISES: [&str; 10] = [
    "Running",
    "Cycling",
    "Rowing",
    "Jump Rope",
    "Burpees",
    "Mountain Climbers",
    "Step Ups",
    "Air Squats",
    "Push Ups",
    "Plank",
];

const STRENGTH_EXERCISES: [&str; 10] = [
    "Deadlifts",
    "Squats",
    "Bench Press",
    "Rows",
    "Overhead Press",
    "Pull Ups",
    "Lunges",
    "Dips",
    "Face Pulls",
    "Romanian Deadlifts",
];

const FLEXIBILITY_EXERCISES: [&str; 10] = [
    "Forward Fold",
    "Downward Dog",
    "Cat Cow Stretch",
    "Hip Flexor Stretch",
    "Hamstring Stretch",
    "Shoulder Stretch",
    "Cobra Stretch",
    "Child's Pose",
    "Butterfly Stretch",
    "Spinal Twist",
];

const OVERALL_FITNESS_EXERCISES: [&str; 10] = [
    "Push Ups",
    "Squats",
    "Plank",
    "Lunges",
    "Burpees",
    "Mountain Climbers",
    "Pull Ups",
    "Dips",
    "Glute Bridges",
    "Russian Twists",
];

/// Generates candidate exercise names from user criteria.
///
/// Holds an optional generative backend; `None` means every call takes the
/// curated fallback path.
pub struct ExerciseNameGenerator {
    backend: Option<Arc<dyn TextGenerator>>,
}

impl ExerciseNameGenerator {
    /// Create a generator with an optional generative backend
    #[must_use]
    pub fn new(backend: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { backend }
    }

    /// Produce candidate exercise names for the given criteria.
    ///
    /// Always returns a non-empty list; backend failures are absorbed into
    /// the fallback path.
    pub async fn generate(&self, criteria: &RecommendationCriteria) -> Vec<String> {
        if let Some(backend) = &self.backend {
            let prompt = build_prompt(criteria);
            match backend.complete(&prompt).await {
                Ok(text) => {
                    let names = parse_name_list(&text);
                    if names.is_empty() {
                        warn!(
                            backend = backend.name(),
                            "Generative backend returned no usable names, using fallback"
                        );
                    } else {
                        debug!(
                            backend = backend.name(),
                            count = names.len(),
                            "Generative backend produced exercise names"
                        );
                        return names;
                    }
                }
                Err(err) => {
                    warn!(
                        backend = backend.name(),
                        error = %err,
                        "Generative backend failed, using fallback"
                    );
                }
            }
        }

        fallback_for_goal(criteria.goal.as_str())
    }
}

/// Build the single natural-language prompt for the generative backend
#[must_use]
pub fn build_prompt(criteria: &RecommendationCriteria) -> String {
    format!(
        "You are a fitness expert. Suggest exercises for a {} level {} individual \
         with access to {}, whose primary goal is {}. \
         Respond with ONLY a comma-separated list of 8-10 exercise names. \
         Do not include numbering, explanations, or any other text.",
        criteria.fitness_level, criteria.body_type, criteria.equipment, criteria.goal,
    )
}

/// Parse a raw completion into exercise names: split on commas, trim each
/// piece, discard empty strings
#[must_use]
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|piece| piece.trim().to_owned())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Curated fallback list for a goal string.
///
/// Lookup is case-insensitive; unrecognized goals get the overall fitness
/// list.
#[must_use]
pub fn fallback_for_goal(goal: &str) -> Vec<String> {
    let goal = FitnessGoal::from_str(goal).unwrap_or(FitnessGoal::OverallFitness);
    let table = match goal {
        FitnessGoal::WeightLoss => &WEIGHT_LOSS_EXERCISES,
        FitnessGoal::MuscleGain => &MUSCLE_GAIN_EXERCISES,
        FitnessGoal::Endurance => &ENDURANCE_EXERCISES,
        FitnessGoal::Strength => &STRENGTH_EXERCISES,
        FitnessGoal::Flexibility => &FLEXIBILITY_EXERCISES,
        FitnessGoal::OverallFitness => &OVERALL_FITNESS_EXERCISES,
    };
    table.iter().map(|&name| name.to_owned()).collect()
}
