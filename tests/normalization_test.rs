// ABOUTME: Integration tests for upstream exercise record normalization
// ABOUTME: Covers per-field defaults, loose id parsing, and wire serialization shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use flexfit_server::models::{ExerciseRecord, RawExercise, DEFAULT_EQUIPMENT};
use serde_json::json;

#[test]
fn test_fully_empty_record_normalizes_totally() {
    let record = RawExercise::default().normalize(3);
    assert_eq!(record.id, "exercise-3");
    assert_eq!(record.name, "Unknown Exercise");
    assert_eq!(record.body_part, "general");
    assert_eq!(record.equipment, DEFAULT_EQUIPMENT);
    assert_eq!(record.target, "general");
    assert_eq!(record.gif_url, None);
    assert_eq!(record.instructions.len(), 1);
    assert!(record.secondary_muscles.is_empty());
}

#[test]
fn test_body_part_and_target_cross_default() {
    let raw: RawExercise = serde_json::from_value(json!({
        "name": "Lat Pulldown",
        "target": "lats"
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(record.body_part, "lats");
    assert_eq!(record.target, "lats");

    let raw: RawExercise = serde_json::from_value(json!({
        "name": "Lat Pulldown",
        "bodyPart": "back"
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(record.body_part, "back");
    assert_eq!(record.target, "back");
}

#[test]
fn test_numeric_id_on_the_wire() {
    let raw: RawExercise = serde_json::from_value(json!({
        "id": 1432,
        "name": "Cable Fly"
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(record.id, "1432");
}

#[test]
fn test_whitespace_only_fields_treated_as_missing() {
    let raw: RawExercise = serde_json::from_value(json!({
        "id": "   ",
        "name": "  Squats  ",
        "equipment": "",
        "gifUrl": "  "
    }))
    .unwrap();
    let record = raw.normalize(7);
    assert_eq!(record.id, "exercise-7");
    assert_eq!(record.name, "Squats");
    assert_eq!(record.equipment, DEFAULT_EQUIPMENT);
    assert_eq!(record.gif_url, None);
}

#[test]
fn test_empty_instruction_steps_are_dropped() {
    let raw: RawExercise = serde_json::from_value(json!({
        "name": "Plank",
        "instructions": ["  ", "Hold a straight line from head to heels.", ""]
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(
        record.instructions,
        vec!["Hold a straight line from head to heels."]
    );
}

#[test]
fn test_all_empty_instructions_get_default_step() {
    let raw: RawExercise = serde_json::from_value(json!({
        "name": "Plank",
        "instructions": ["", "   "]
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(record.instructions.len(), 1);
    assert!(!record.instructions[0].is_empty());
}

#[test]
fn test_snake_case_aliases_accepted() {
    let raw: RawExercise = serde_json::from_value(json!({
        "name": "Hip Thrust",
        "body_part": "upper legs",
        "gif_url": "https://example.com/hip-thrust.gif",
        "secondary_muscles": ["hamstrings"]
    }))
    .unwrap();
    let record = raw.normalize(0);
    assert_eq!(record.body_part, "upper legs");
    assert_eq!(
        record.gif_url.as_deref(),
        Some("https://example.com/hip-thrust.gif")
    );
    assert_eq!(record.secondary_muscles, vec!["hamstrings"]);
}

#[test]
fn test_record_serializes_camel_case_and_omits_missing_gif() {
    let record = RawExercise::default().normalize(0);
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("bodyPart"));
    assert!(object.contains_key("secondaryMuscles"));
    assert!(!object.contains_key("gifUrl"));
    assert!(!object.contains_key("body_part"));
}

#[test]
fn test_record_round_trips_through_json() {
    let raw: RawExercise = serde_json::from_value(json!({
        "id": "0032",
        "name": "Barbell Deadlift",
        "bodyPart": "upper legs",
        "equipment": "barbell",
        "target": "glutes",
        "gifUrl": "https://example.com/deadlift.gif",
        "instructions": ["Stand with feet hip-width apart.", "Hinge and lift."],
        "secondaryMuscles": ["hamstrings", "lower back"]
    }))
    .unwrap();
    let record = raw.normalize(0);
    let text = serde_json::to_string(&record).unwrap();
    let back: ExerciseRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(record, back);
}
