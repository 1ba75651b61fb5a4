//! Core domain types for the Repforge workout engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Movement classes and per-day exercise buckets
//! - Generated workout proposals (single day or push/pull split)
//! - Workout plans and canonical plan rows
//! - Logged sessions and their volume arithmetic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Default set count for plan rows without an explicit target
pub const DEFAULT_SETS: u32 = 3;

/// Default rep count for plan rows without an explicit target
pub const DEFAULT_REPS: u32 = 10;

// ============================================================================
// Catalog Types
// ============================================================================

/// Movement class within a workout day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementClass {
    Compound,
    Functional,
    Isolated,
}

impl MovementClass {
    /// All movement classes in bucket order
    pub const ALL: [MovementClass; 3] = [
        MovementClass::Compound,
        MovementClass::Functional,
        MovementClass::Isolated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MovementClass::Compound => "compound",
            MovementClass::Functional => "functional",
            MovementClass::Isolated => "isolated",
        }
    }

    /// Parse a movement class name, returning `None` for unknown classes
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "compound" => Some(MovementClass::Compound),
            "functional" => Some(MovementClass::Functional),
            "isolated" => Some(MovementClass::Isolated),
            _ => None,
        }
    }
}

/// The three exercise buckets making up one workout day
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DayBuckets {
    #[serde(default)]
    pub compound: Vec<String>,
    #[serde(default)]
    pub functional: Vec<String>,
    #[serde(default)]
    pub isolated: Vec<String>,
}

impl DayBuckets {
    /// Get the bucket for a movement class
    pub fn bucket(&self, class: MovementClass) -> &[String] {
        match class {
            MovementClass::Compound => &self.compound,
            MovementClass::Functional => &self.functional,
            MovementClass::Isolated => &self.isolated,
        }
    }

    /// Total number of exercises across all three buckets
    pub fn len(&self) -> usize {
        self.compound.len() + self.functional.len() + self.isolated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn to_value(&self) -> serde_json::Value {
        json!({
            "compound": self.compound,
            "functional": self.functional,
            "isolated": self.isolated,
        })
    }
}

/// The two nested day objects behind the `push_pull_split` pseudo-key
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SplitDays {
    pub push_day: DayBuckets,
    pub pull_day: DayBuckets,
}

// ============================================================================
// Generated Workout Types
// ============================================================================

/// A generated proposal for a single workout day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayWorkout {
    pub day: String,
    pub exercises: DayBuckets,
}

impl DayWorkout {
    /// Derived display label for this proposal
    pub fn display_name(&self) -> String {
        format!("{} Workout", self.day)
    }

    /// Iterate exercises as `(class, name)` rows in bucket order,
    /// draw order within each bucket.
    pub fn rows(&self) -> impl Iterator<Item = (MovementClass, &str)> {
        MovementClass::ALL.into_iter().flat_map(|class| {
            self.exercises
                .bucket(class)
                .iter()
                .map(move |name| (class, name.as_str()))
        })
    }
}

/// Output of the workout generator: one day, or both halves of the
/// push/pull split.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeneratedWorkout {
    Split {
        push_day: DayWorkout,
        pull_day: DayWorkout,
    },
    Single(DayWorkout),
}

impl GeneratedWorkout {
    pub fn display_name(&self) -> String {
        match self {
            GeneratedWorkout::Single(day) => day.display_name(),
            GeneratedWorkout::Split { .. } => "Push/Pull Split Workout".to_string(),
        }
    }

    /// Lower this proposal into the payload shape consumed by
    /// [`crate::generator::normalize`]. Both variants lower to name-only
    /// buckets; the split case nests its two days one level deeper.
    pub fn to_payload(&self) -> GeneratorPayload {
        match self {
            GeneratedWorkout::Single(day) => {
                GeneratorPayload::NestedNameBuckets(day.exercises.to_value())
            }
            GeneratedWorkout::Split { push_day, pull_day } => {
                GeneratorPayload::NestedNameBuckets(json!({
                    "push_day": push_day.exercises.to_value(),
                    "pull_day": pull_day.exercises.to_value(),
                }))
            }
        }
    }
}

/// The known generator payload shapes, as an explicit tagged union
///
/// Historically the application emitted several shapes for generated
/// workouts; normalization is total over both variants.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratorPayload {
    /// Plan-shaped list of exercise objects with optional numeric targets
    FlatExerciseList(Vec<PlannedExercise>),
    /// Raw name-only buckets of arbitrary nesting
    NestedNameBuckets(serde_json::Value),
}

/// Canonical editable plan row produced by normalization
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanRow {
    pub muscle_group: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

// ============================================================================
// Plan and Session Types
// ============================================================================

/// A saved workout plan (boundary type, owned by the backing store)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exercises: Vec<PlannedExercise>,
}

/// One exercise within a workout plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    pub name: String,
    /// Muscle group or training type label (e.g. "push", "strength")
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
}

/// One logged set: weight moved for a number of reps
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetEntry {
    pub weight: f64,
    pub reps: u32,
}

impl SetEntry {
    /// Volume contribution of this set (weight × reps)
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// All logged sets for one exercise within a session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseLog {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

/// A completed workout session, ready for summary encoding
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSessionResult {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub plan_name: String,
    pub session_date: NaiveDate,
    pub exercises: Vec<ExerciseLog>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutSessionResult {
    /// Total volume: sum of weight × reps across every logged set
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|ex| ex.sets.iter())
            .map(SetEntry::volume)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_sets(sets: Vec<SetEntry>) -> WorkoutSessionResult {
        WorkoutSessionResult {
            id: Uuid::new_v4(),
            plan_name: "Test Plan".into(),
            session_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            exercises: vec![ExerciseLog {
                name: "Bench Press".into(),
                sets,
            }],
            notes: None,
        }
    }

    #[test]
    fn test_total_volume_sums_weight_times_reps() {
        let session = session_with_sets(vec![
            SetEntry {
                weight: 135.0,
                reps: 10,
            },
            SetEntry {
                weight: 145.0,
                reps: 8,
            },
        ]);
        assert_eq!(session.total_volume(), 135.0 * 10.0 + 145.0 * 8.0);
    }

    #[test]
    fn test_total_volume_empty_session_is_zero() {
        let session = session_with_sets(vec![]);
        assert_eq!(session.total_volume(), 0.0);
    }

    #[test]
    fn test_movement_class_parse() {
        assert_eq!(
            MovementClass::parse("compound"),
            Some(MovementClass::Compound)
        );
        assert_eq!(
            MovementClass::parse(" Isolated "),
            Some(MovementClass::Isolated)
        );
        assert_eq!(MovementClass::parse("cardio"), None);
    }

    #[test]
    fn test_day_workout_rows_preserve_bucket_order() {
        let day = DayWorkout {
            day: "push".into(),
            exercises: DayBuckets {
                compound: vec!["Bench Press".into()],
                functional: vec!["Push-up".into()],
                isolated: vec!["Cable Fly".into()],
            },
        };
        let rows: Vec<_> = day.rows().collect();
        assert_eq!(
            rows,
            vec![
                (MovementClass::Compound, "Bench Press"),
                (MovementClass::Functional, "Push-up"),
                (MovementClass::Isolated, "Cable Fly"),
            ]
        );
    }

    #[test]
    fn test_generated_workout_untagged_roundtrip() {
        let single = GeneratedWorkout::Single(DayWorkout {
            day: "legs".into(),
            exercises: DayBuckets::default(),
        });
        let json = serde_json::to_string(&single).unwrap();
        let back: GeneratedWorkout = serde_json::from_str(&json).unwrap();
        assert_eq!(single, back);
    }

    #[test]
    fn test_split_payload_lowers_to_nested_buckets() {
        let split = GeneratedWorkout::Split {
            push_day: DayWorkout {
                day: "push_day".into(),
                exercises: DayBuckets {
                    compound: vec!["Bench Press".into()],
                    ..DayBuckets::default()
                },
            },
            pull_day: DayWorkout {
                day: "pull_day".into(),
                exercises: DayBuckets {
                    compound: vec!["Barbell Row".into()],
                    ..DayBuckets::default()
                },
            },
        };
        match split.to_payload() {
            GeneratorPayload::NestedNameBuckets(value) => {
                assert!(value.get("push_day").is_some());
                assert!(value.get("pull_day").is_some());
            }
            GeneratorPayload::FlatExerciseList(_) => panic!("expected nested buckets"),
        }
    }
}
