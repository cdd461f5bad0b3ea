// ABOUTME: Integration tests for the exercise name generator
// ABOUTME: Covers fallback tables, prompt construction, completion parsing, and backend degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use flexfit_server::errors::{AppError, AppResult};
use flexfit_server::llm::TextGenerator;
use flexfit_server::models::{BodyType, FitnessGoal, FitnessLevel, RecommendationCriteria};
use flexfit_server::recommendation::generator::{build_prompt, fallback_for_goal, parse_name_list};
use flexfit_server::recommendation::ExerciseNameGenerator;
use std::sync::Arc;

struct StaticBackend(&'static str);

#[async_trait]
impl TextGenerator for StaticBackend {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Ok(self.0.to_owned())
    }
}

struct FailingBackend;

#[async_trait]
impl TextGenerator for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::internal("backend exploded"))
    }
}

fn criteria() -> RecommendationCriteria {
    RecommendationCriteria {
        body_type: BodyType::Mesomorph,
        equipment: "dumbbell".to_owned(),
        goal: FitnessGoal::Strength,
        fitness_level: FitnessLevel::Intermediate,
    }
}

#[test]
fn test_strength_fallback_list() {
    let names = fallback_for_goal("strength");
    assert_eq!(
        names,
        vec![
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
        ]
    );
}

#[test]
fn test_fallback_lookup_is_case_insensitive() {
    assert_eq!(fallback_for_goal("Strength"), fallback_for_goal("STRENGTH"));
    assert_eq!(
        fallback_for_goal("Weight Loss"),
        fallback_for_goal("weight loss")
    );
}

#[test]
fn test_unknown_goal_gets_overall_fitness_list() {
    assert_eq!(
        fallback_for_goal("become a wizard"),
        fallback_for_goal("overall fitness")
    );
}

#[test]
fn test_every_goal_has_ten_fallback_names() {
    for goal in [
        "weight loss",
        "muscle gain",
        "endurance",
        "strength",
        "flexibility",
        "overall fitness",
    ] {
        let names = fallback_for_goal(goal);
        assert_eq!(names.len(), 10, "goal {goal} should have 10 fallback names");
        assert!(names.iter().all(|n| !n.trim().is_empty()));
    }
}

#[test]
fn test_parse_name_list_trims_and_drops_empties() {
    let names = parse_name_list(" Deadlifts , Squats ,, Bench Press ,  ");
    assert_eq!(names, vec!["Deadlifts", "Squats", "Bench Press"]);
}

#[test]
fn test_parse_name_list_empty_input() {
    assert!(parse_name_list("").is_empty());
    assert!(parse_name_list("  , ,  ").is_empty());
}

#[test]
fn test_prompt_embeds_all_criteria() {
    let prompt = build_prompt(&criteria());
    assert!(prompt.contains("intermediate"));
    assert!(prompt.contains("Mesomorph"));
    assert!(prompt.contains("dumbbell"));
    assert!(prompt.contains("strength"));
    assert!(prompt.contains("comma-separated"));
}

#[tokio::test]
async fn test_generator_without_backend_uses_fallback() {
    let generator = ExerciseNameGenerator::new(None);
    let names = generator.generate(&criteria()).await;
    assert_eq!(names, fallback_for_goal("strength"));
}

#[tokio::test]
async fn test_generator_parses_backend_completion() {
    let backend: Arc<dyn TextGenerator> =
        Arc::new(StaticBackend("Goblet Squats, Renegade Rows, Farmer Carries"));
    let generator = ExerciseNameGenerator::new(Some(backend));
    let names = generator.generate(&criteria()).await;
    assert_eq!(names, vec!["Goblet Squats", "Renegade Rows", "Farmer Carries"]);
}

#[tokio::test]
async fn test_generator_falls_back_on_backend_error() {
    let backend: Arc<dyn TextGenerator> = Arc::new(FailingBackend);
    let generator = ExerciseNameGenerator::new(Some(backend));
    let names = generator.generate(&criteria()).await;
    assert_eq!(names, fallback_for_goal("strength"));
}

#[tokio::test]
async fn test_generator_falls_back_on_unusable_completion() {
    let backend: Arc<dyn TextGenerator> = Arc::new(StaticBackend("   ,  ,   "));
    let generator = ExerciseNameGenerator::new(Some(backend));
    let names = generator.generate(&criteria()).await;
    assert_eq!(names, fallback_for_goal("strength"));
}
