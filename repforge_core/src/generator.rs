//! Workout generation: quota-bound random draws from the catalog.
//!
//! Each generated day draws a fixed quota per movement class - 2 compound,
//! 2 functional, 3 isolated - without replacement. The `push_pull` day
//! generates both halves of the split independently.

use crate::catalog::flatten;
use crate::{
    DayBuckets, DayWorkout, Error, ExerciseCatalog, GeneratedWorkout, GeneratorPayload, PlanRow,
    Result, DEFAULT_REPS, DEFAULT_SETS,
};
use rand::Rng;

/// Exercises drawn per compound bucket
pub const QUOTA_COMPOUND: usize = 2;

/// Exercises drawn per functional bucket
pub const QUOTA_FUNCTIONAL: usize = 2;

/// Exercises drawn per isolated bucket
pub const QUOTA_ISOLATED: usize = 3;

/// Day-type key requesting both halves of the push/pull split
pub const PUSH_PULL_DAY: &str = "push_pull";

/// Sample up to `quota` items from `pool` without replacement.
///
/// Partial Fisher-Yates: each draw picks a uniformly random index from the
/// remaining pool and removes it, so every remaining item is equally likely
/// at every step. A pool smaller than the quota yields the whole pool.
fn sample<R: Rng + ?Sized>(pool: &[String], quota: usize, rng: &mut R) -> Vec<String> {
    let mut remaining: Vec<String> = pool.to_vec();
    let count = quota.min(remaining.len());
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.gen_range(0..remaining.len());
        drawn.push(remaining.swap_remove(idx));
    }
    drawn
}

fn draw_day<R: Rng + ?Sized>(buckets: &DayBuckets, day: &str, rng: &mut R) -> DayWorkout {
    let workout = DayWorkout {
        day: day.to_string(),
        exercises: DayBuckets {
            compound: sample(&buckets.compound, QUOTA_COMPOUND, rng),
            functional: sample(&buckets.functional, QUOTA_FUNCTIONAL, rng),
            isolated: sample(&buckets.isolated, QUOTA_ISOLATED, rng),
        },
    };
    tracing::debug!(
        "Drew {} exercises for day '{}'",
        workout.exercises.len(),
        day
    );
    workout
}

/// Generate a workout proposal for a day type.
///
/// `push_pull` draws both halves of the split catalog independently, with
/// the same quotas applied to each. Any other day type is looked up
/// directly and fails with [`Error::UnknownWorkoutDay`] when absent; no
/// partial result is returned in that case.
///
/// Pure function of (catalog, day type, RNG state): inject a seeded RNG
/// for deterministic output, or use [`generate_default`].
pub fn generate<R: Rng + ?Sized>(
    catalog: &ExerciseCatalog,
    day_type: &str,
    rng: &mut R,
) -> Result<GeneratedWorkout> {
    if day_type == PUSH_PULL_DAY {
        let split = catalog
            .split()
            .ok_or_else(|| Error::UnknownWorkoutDay(day_type.to_string()))?;
        return Ok(GeneratedWorkout::Split {
            push_day: draw_day(&split.push_day, "push_day", rng),
            pull_day: draw_day(&split.pull_day, "pull_day", rng),
        });
    }

    let buckets = catalog.day(day_type)?;
    Ok(GeneratedWorkout::Single(draw_day(buckets, day_type, rng)))
}

/// Generate with the process-wide RNG
pub fn generate_default(catalog: &ExerciseCatalog, day_type: &str) -> Result<GeneratedWorkout> {
    generate(catalog, day_type, &mut rand::thread_rng())
}

/// Normalize any generator payload into canonical plan rows.
///
/// Total over both payload variants: flat exercise lists keep their own
/// numeric targets (defaulting to 3x10 where absent), name-only buckets
/// are flattened and every row takes the fallback day label and 3x10.
/// Never fails; an unrecognizable payload normalizes to no rows.
pub fn normalize(payload: &GeneratorPayload, fallback_day: &str) -> Vec<PlanRow> {
    match payload {
        GeneratorPayload::FlatExerciseList(items) => items
            .iter()
            .map(|ex| PlanRow {
                muscle_group: if ex.kind.is_empty() {
                    fallback_day.to_string()
                } else {
                    ex.kind.clone()
                },
                exercise: ex.name.clone(),
                sets: ex.sets.unwrap_or(DEFAULT_SETS),
                reps: ex.reps.unwrap_or(DEFAULT_REPS),
            })
            .collect(),
        GeneratorPayload::NestedNameBuckets(value) => flatten(value)
            .into_iter()
            .map(|name| PlanRow {
                muscle_group: fallback_day.to_string(),
                exercise: name,
                sets: DEFAULT_SETS,
                reps: DEFAULT_REPS,
            })
            .collect(),
    }
}

/// Convenience: normalize a generated workout directly
pub fn normalize_generated(generated: &GeneratedWorkout, fallback_day: &str) -> Vec<PlanRow> {
    normalize(&generated.to_payload(), fallback_day)
}
