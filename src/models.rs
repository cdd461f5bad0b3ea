// ABOUTME: Core data models for the FlexFit recommendation server
// ABOUTME: Defines RawExercise, ExerciseRecord, RecommendationCriteria and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Core Data Models
//!
//! Two-tier exercise model: `RawExercise` is the permissive, untrusted shape
//! coming off the upstream catalog wire (every field optional, ids may arrive
//! as numbers), and `ExerciseRecord` is the canonical shape everything
//! downstream consumes. Normalization is the single conversion boundary; no
//! record with missing fields crosses it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default equipment when the upstream record or the user omits it
pub const DEFAULT_EQUIPMENT: &str = "body weight";

/// Default body region / target muscle when the upstream record omits both
const DEFAULT_REGION: &str = "general";

/// Instruction used when the upstream record carries none
const DEFAULT_INSTRUCTION: &str = "Perform the exercise with controlled form.";

/// Accept upstream ids that arrive as JSON strings or numbers
fn de_loose_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseId {
        Text(String),
        Number(u64),
    }

    let value = Option::<LooseId>::deserialize(deserializer)?;
    Ok(value.map(|id| match id {
        LooseId::Text(s) => s,
        LooseId::Number(n) => n.to_string(),
    }))
}

/// Untrusted exercise record as returned by the upstream catalog.
///
/// Every field is optional; the upstream source is known to omit or rename
/// fields between catalog revisions. This type never leaves the catalog
/// client module boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExercise {
    /// Upstream identifier (string or numeric on the wire)
    #[serde(default, deserialize_with = "de_loose_id")]
    pub id: Option<String>,
    /// Exercise name
    #[serde(default)]
    pub name: Option<String>,
    /// Coarse body region
    #[serde(default, rename = "bodyPart", alias = "body_part")]
    pub body_part: Option<String>,
    /// Required equipment
    #[serde(default)]
    pub equipment: Option<String>,
    /// Primary muscle
    #[serde(default)]
    pub target: Option<String>,
    /// Demonstration GIF
    #[serde(default, rename = "gifUrl", alias = "gif_url")]
    pub gif_url: Option<String>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    /// Secondary muscles worked
    #[serde(default, rename = "secondaryMuscles", alias = "secondary_muscles")]
    pub secondary_muscles: Option<Vec<String>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

impl RawExercise {
    /// Normalize into the canonical record, applying per-field defaults.
    ///
    /// `index` is the record's position within the fetched snapshot and seeds
    /// the synthesized id when the upstream omits one.
    #[must_use]
    pub fn normalize(self, index: usize) -> ExerciseRecord {
        let body_part_raw = non_empty(self.body_part);
        let target_raw = non_empty(self.target);

        let body_part = body_part_raw
            .clone()
            .or_else(|| target_raw.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());
        let target = target_raw
            .or(body_part_raw)
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        let instructions = self
            .instructions
            .map(|steps| {
                steps
                    .into_iter()
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|steps| !steps.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_INSTRUCTION.to_owned()]);

        ExerciseRecord {
            id: non_empty(self.id).unwrap_or_else(|| format!("exercise-{index}")),
            name: non_empty(self.name).unwrap_or_else(|| "Unknown Exercise".to_owned()),
            body_part,
            equipment: non_empty(self.equipment).unwrap_or_else(|| DEFAULT_EQUIPMENT.to_owned()),
            target,
            gif_url: non_empty(self.gif_url),
            instructions,
            secondary_muscles: self.secondary_muscles.unwrap_or_default(),
        }
    }
}

/// Canonical exercise record consumed by the matcher and served to clients.
///
/// Invariant: every field is populated after normalization; only `gif_url`
/// may be absent, and it is omitted from JSON rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Unique within a catalog snapshot; synthesized when upstream omits it
    pub id: String,
    /// Human-readable exercise name, never empty
    pub name: String,
    /// Coarse body region
    #[serde(rename = "bodyPart")]
    pub body_part: String,
    /// Required equipment, defaults to "body weight"
    pub equipment: String,
    /// Primary muscle
    pub target: String,
    /// Demonstration GIF, when the upstream provides one
    #[serde(rename = "gifUrl", skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
    /// Ordered instruction steps, never empty
    pub instructions: Vec<String>,
    /// Secondary muscles worked (possibly empty)
    #[serde(rename = "secondaryMuscles")]
    pub secondary_muscles: Vec<String>,
}

/// Derived facet value (unique body part, equipment type, or target muscle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// The facet value
    pub name: String,
}

/// Somatotype reported during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BodyType {
    /// Lean build, fast metabolism
    Ectomorph,
    /// Naturally muscular build
    Mesomorph,
    /// Broader build, slower metabolism
    Endomorph,
}

impl BodyType {
    /// Canonical display string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ectomorph => "Ectomorph",
            Self::Mesomorph => "Mesomorph",
            Self::Endomorph => "Endomorph",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ectomorph" => Ok(Self::Ectomorph),
            "mesomorph" => Ok(Self::Mesomorph),
            "endomorph" => Ok(Self::Endomorph),
            other => Err(format!("Unknown body type: {other}")),
        }
    }
}

impl TryFrom<String> for BodyType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BodyType> for String {
    fn from(value: BodyType) -> Self {
        value.as_str().to_owned()
    }
}

/// Training goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FitnessGoal {
    /// Fat loss / conditioning
    WeightLoss,
    /// Hypertrophy
    MuscleGain,
    /// Aerobic and muscular endurance
    Endurance,
    /// Maximal strength
    Strength,
    /// Mobility and range of motion
    Flexibility,
    /// General physical preparedness
    OverallFitness,
}

impl FitnessGoal {
    /// Canonical display string (matches the upstream app's goal labels)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::OverallFitness => "overall fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight loss" => Ok(Self::WeightLoss),
            "muscle gain" => Ok(Self::MuscleGain),
            "endurance" => Ok(Self::Endurance),
            "strength" => Ok(Self::Strength),
            "flexibility" => Ok(Self::Flexibility),
            "overall fitness" => Ok(Self::OverallFitness),
            other => Err(format!("Unknown fitness goal: {other}")),
        }
    }
}

impl TryFrom<String> for FitnessGoal {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FitnessGoal> for String {
    fn from(value: FitnessGoal) -> Self {
        value.as_str().to_owned()
    }
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Consistent training history
    Intermediate,
    /// Multiple years of structured training
    Advanced,
}

impl FitnessLevel {
    /// Canonical display string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("Unknown fitness level: {other}")),
        }
    }
}

impl TryFrom<String> for FitnessLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FitnessLevel> for String {
    fn from(value: FitnessLevel) -> Self {
        value.as_str().to_owned()
    }
}

/// Validated per-request recommendation criteria.
///
/// Ephemeral: constructed from the request body, discarded after the
/// response is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    /// Somatotype
    #[serde(rename = "bodyType")]
    pub body_type: BodyType,
    /// Available equipment as a free-form string, defaulted to "body weight"
    pub equipment: String,
    /// Training goal
    pub goal: FitnessGoal,
    /// Experience level
    #[serde(rename = "fitnessLevel")]
    pub fitness_level: FitnessLevel,
}
