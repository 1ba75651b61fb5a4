//! Exercise catalog: the static taxonomy workouts are generated from.
//!
//! The catalog maps day-type keys ("push", "pull", "legs") to three
//! movement-class buckets, plus the `push_pull_split` pseudo-key holding
//! the nested push/pull day pair. It is built once and immutable after.

use crate::{DayBuckets, Error, MovementClass, Result, SplitDays};
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// JSON pseudo-key holding the nested push/pull day pair
pub const PUSH_PULL_SPLIT_KEY: &str = "push_pull_split";

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// The complete exercise taxonomy
#[derive(Clone, Debug, Default)]
pub struct ExerciseCatalog {
    days: BTreeMap<String, DayBuckets>,
    split: Option<SplitDays>,
}

/// Raw file shape: `{ "exercises": { <day>: ..., "push_pull_split": ... } }`
#[derive(Deserialize)]
struct CatalogFile {
    exercises: BTreeMap<String, Value>,
}

impl ExerciseCatalog {
    /// Parse a catalog from its JSON file format.
    ///
    /// Bucket contents are read leniently: each class bucket is flattened
    /// and non-string leaves are dropped rather than rejected, so a
    /// malformed entry degrades to fewer exercises instead of a load error.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let mut days = BTreeMap::new();
        let mut split = None;

        for (key, value) in file.exercises {
            if key == PUSH_PULL_SPLIT_KEY {
                split = Some(SplitDays {
                    push_day: buckets_from_value(value.get("push_day").unwrap_or(&Value::Null)),
                    pull_day: buckets_from_value(value.get("pull_day").unwrap_or(&Value::Null)),
                });
            } else {
                days.insert(key, buckets_from_value(&value));
            }
        }

        Ok(Self { days, split })
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!("Loaded exercise catalog from {:?}", path);
        Ok(catalog)
    }

    /// Ordered day-type keys, excluding the split pseudo-key
    pub fn day_types(&self) -> Vec<&str> {
        self.days.keys().map(String::as_str).collect()
    }

    /// Look up the buckets for a day type
    pub fn day(&self, day_type: &str) -> Result<&DayBuckets> {
        self.days
            .get(day_type)
            .ok_or_else(|| Error::UnknownWorkoutDay(day_type.to_string()))
    }

    /// The nested push/pull day pair, if the catalog defines one
    pub fn split(&self) -> Option<&SplitDays> {
        self.split.as_ref()
    }

    /// Exercise names for one movement class of one day.
    ///
    /// An unknown day type is an error; an unknown movement class is not,
    /// it yields an empty slice so callers can always render something.
    pub fn exercises_for(&self, day_type: &str, class: &str) -> Result<&[String]> {
        let buckets = self.day(day_type)?;
        match MovementClass::parse(class) {
            Some(class) => Ok(buckets.bucket(class)),
            None => {
                tracing::debug!("Unknown movement class '{}', returning empty", class);
                Ok(&[])
            }
        }
    }

    /// Check the catalog for problems, returning human-readable descriptions.
    ///
    /// Currently this checks that every bucket holds unique names and that
    /// each day defines at least one exercise.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut check_day = |label: &str, buckets: &DayBuckets| {
            if buckets.is_empty() {
                errors.push(format!("Day '{}' has no exercises", label));
            }
            for class in MovementClass::ALL {
                let mut seen = HashSet::new();
                for name in buckets.bucket(class) {
                    if !seen.insert(name.as_str()) {
                        errors.push(format!(
                            "Day '{}': duplicate {} exercise '{}'",
                            label,
                            class.as_str(),
                            name
                        ));
                    }
                }
            }
        };

        for (day, buckets) in &self.days {
            check_day(day, buckets);
        }
        if let Some(split) = &self.split {
            check_day("push_pull_split/push_day", &split.push_day);
            check_day("push_pull_split/pull_day", &split.pull_day);
        }

        errors
    }
}

/// Flatten an arbitrarily nested bucket structure into its string leaves.
///
/// Arrays and objects are recursed through at any depth; object values are
/// visited in key order so traversal is deterministic. Non-string leaves
/// are skipped silently - a malformed catalog entry is not an error here.
pub fn flatten(node: &Value) -> Vec<String> {
    match node {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(flatten).collect(),
        Value::Object(map) => map.values().flat_map(flatten).collect(),
        _ => Vec::new(),
    }
}

/// Read one day's buckets out of a JSON value, dropping anything that
/// is not a string leaf.
fn buckets_from_value(value: &Value) -> DayBuckets {
    let class_names = |class: MovementClass| {
        value
            .get(class.as_str())
            .map(flatten)
            .unwrap_or_default()
    };
    DayBuckets {
        compound: class_names(MovementClass::Compound),
        functional: class_names(MovementClass::Functional),
        isolated: class_names(MovementClass::Isolated),
    }
}

/// Builds the default catalog with the built-in exercise taxonomy
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference.
pub fn build_default_catalog() -> ExerciseCatalog {
    let mut days = BTreeMap::new();

    days.insert(
        "push".to_string(),
        DayBuckets {
            compound: vec![
                "Bench Press".into(),
                "Overhead Press".into(),
                "Incline Dumbbell Press".into(),
                "Weighted Dip".into(),
            ],
            functional: vec![
                "Push-up".into(),
                "Landmine Press".into(),
                "Medicine Ball Chest Pass".into(),
                "Pike Push-up".into(),
            ],
            isolated: vec![
                "Cable Fly".into(),
                "Lateral Raise".into(),
                "Triceps Pushdown".into(),
                "Overhead Triceps Extension".into(),
                "Front Raise".into(),
            ],
        },
    );

    days.insert(
        "pull".to_string(),
        DayBuckets {
            compound: vec![
                "Deadlift".into(),
                "Barbell Row".into(),
                "Pull-up".into(),
                "Lat Pulldown".into(),
            ],
            functional: vec![
                "Face Pull".into(),
                "Renegade Row".into(),
                "Inverted Row".into(),
                "Band Pull-apart".into(),
            ],
            isolated: vec![
                "Barbell Curl".into(),
                "Hammer Curl".into(),
                "Rear Delt Fly".into(),
                "Straight-arm Pulldown".into(),
                "Dumbbell Shrug".into(),
            ],
        },
    );

    days.insert(
        "legs".to_string(),
        DayBuckets {
            compound: vec![
                "Back Squat".into(),
                "Romanian Deadlift".into(),
                "Leg Press".into(),
                "Front Squat".into(),
            ],
            functional: vec![
                "Walking Lunge".into(),
                "Step-up".into(),
                "Goblet Squat".into(),
                "Kettlebell Swing".into(),
            ],
            isolated: vec![
                "Leg Extension".into(),
                "Leg Curl".into(),
                "Standing Calf Raise".into(),
                "Seated Calf Raise".into(),
                "Hip Abduction".into(),
            ],
        },
    );

    let split = SplitDays {
        push_day: DayBuckets {
            compound: vec![
                "Bench Press".into(),
                "Overhead Press".into(),
                "Close-grip Bench Press".into(),
            ],
            functional: vec![
                "Push-up".into(),
                "Landmine Press".into(),
                "Dumbbell Floor Press".into(),
            ],
            isolated: vec![
                "Cable Fly".into(),
                "Lateral Raise".into(),
                "Triceps Pushdown".into(),
                "Front Raise".into(),
            ],
        },
        pull_day: DayBuckets {
            compound: vec![
                "Deadlift".into(),
                "Barbell Row".into(),
                "Weighted Pull-up".into(),
            ],
            functional: vec![
                "Face Pull".into(),
                "Inverted Row".into(),
                "Band Pull-apart".into(),
            ],
            isolated: vec![
                "Barbell Curl".into(),
                "Rear Delt Fly".into(),
                "Straight-arm Pulldown".into(),
                "Hammer Curl".into(),
            ],
        },
    };

    ExerciseCatalog {
        days,
        split: Some(split),
    }
}
