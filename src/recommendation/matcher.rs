// ABOUTME: Exercise matcher and backfill engine reconciling AI names with the catalog
// ABOUTME: Case-insensitive substring matching, equipment preference, length tie-break, backfill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Exercise Matcher / Backfill Engine
//!
//! Reconciles free-text exercise name suggestions against the normalized
//! catalog. Suggested names and catalog names frequently differ in suffixes
//! and articles, so matching is case-insensitive substring containment, not
//! equality. Among multiple textual matches, entries whose equipment equals
//! the user's preference win; ties are broken by picking the catalog name
//! whose length is closest to the suggestion — a deliberately cheap proxy
//! for string similarity that keeps the matcher O(n·m) and dependency-free.
//!
//! Suggestions that match nothing are silently dropped. When too few
//! suggestions survive, a backfill pass tops the result up from the catalog,
//! preferring the user's equipment pool, so callers always receive a
//! usable-sized plan.

use crate::models::ExerciseRecord;
use std::collections::HashSet;

/// Backfill triggers strictly below this many matched results
pub const MIN_MATCHED_RESULTS: usize = 5;

/// Backfill tops the result up to this size
pub const TARGET_RESULTS: usize = 10;

/// Match recommended names against the catalog and backfill deficits.
///
/// Input order of `recommended_names` defines output precedence. The result
/// is duplicate-free by id. Returns an empty list only when `catalog` is
/// empty.
#[must_use]
pub fn match_exercises(
    recommended_names: &[String],
    catalog: &[ExerciseRecord],
    preferred_equipment: &str,
) -> Vec<ExerciseRecord> {
    let mut selected_ids: HashSet<&str> = HashSet::new();
    let mut result: Vec<ExerciseRecord> = Vec::new();

    for recommended in recommended_names {
        let needle = recommended.trim().to_lowercase();
        // Suggestions often arrive pluralized ("Deadlifts") while catalog
        // names are singular; the stem is a prefix of the needle, so this
        // only ever broadens the match set
        let stem = needle.strip_suffix('s').unwrap_or(&needle);
        if stem.is_empty() {
            continue;
        }

        let matches: Vec<&ExerciseRecord> = catalog
            .iter()
            .filter(|e| !selected_ids.contains(e.id.as_str()))
            .filter(|e| e.name.to_lowercase().contains(stem))
            .collect();

        // An unmatched suggestion is dropped, never a failure
        if matches.is_empty() {
            continue;
        }

        let preferred: Vec<&ExerciseRecord> = matches
            .iter()
            .copied()
            .filter(|e| e.equipment.eq_ignore_ascii_case(preferred_equipment))
            .collect();

        let candidates = if preferred.is_empty() {
            &matches
        } else {
            &preferred
        };

        // Closest name length to the suggestion; min_by_key keeps the first
        // candidate in catalog order on ties
        let chosen = candidates
            .iter()
            .min_by_key(|e| e.name.len().abs_diff(needle.len()))
            .copied();

        if let Some(exercise) = chosen {
            if selected_ids.insert(exercise.id.as_str()) {
                result.push(exercise.clone());
            }
        }
    }

    if result.len() < MIN_MATCHED_RESULTS && !catalog.is_empty() {
        backfill(&mut result, catalog, preferred_equipment);
    }

    result
}

/// Top the result up to [`TARGET_RESULTS`] from the catalog.
///
/// Prefers the equipment-matching pool; only when that pool has nothing left
/// does it fall back to arbitrary catalog entries, in catalog order.
fn backfill(result: &mut Vec<ExerciseRecord>, catalog: &[ExerciseRecord], preferred_equipment: &str) {
    let selected_ids: HashSet<String> = result.iter().map(|e| e.id.clone()).collect();

    let equipment_pool: Vec<&ExerciseRecord> = catalog
        .iter()
        .filter(|e| {
            e.equipment.eq_ignore_ascii_case(preferred_equipment)
                && !selected_ids.contains(&e.id)
        })
        .collect();

    let pool: Vec<&ExerciseRecord> = if equipment_pool.is_empty() {
        catalog
            .iter()
            .filter(|e| !selected_ids.contains(&e.id))
            .collect()
    } else {
        equipment_pool
    };

    for exercise in pool {
        if result.len() >= TARGET_RESULTS {
            break;
        }
        result.push(exercise.clone());
    }
}
