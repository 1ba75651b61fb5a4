//! Workout summary codec: session results to post text and back.
//!
//! A completed session is shared as a plain-text post; the text layout is
//! the canonical interchange format, so decoding is a best-effort scraper
//! rather than a strict grammar. Encoding always emits the grouped
//! exercise/set-line form; decoding also accepts the older flattened
//! bullet form still present in stored posts.

use crate::WorkoutSessionResult;
use serde::Serialize;
use std::fmt::Write as _;

/// Literal body emitted (and stored) when a session has no notes
pub const NO_NOTES_SENTINEL: &str = "No notes today.";

/// Marker line opening the summary body
const SUMMARY_HEADER: &str = "\u{1f3cb}\u{fe0f} Workout Summary";

/// Historical marker used by earlier clients
const LEGACY_SUMMARY_MARKER: &str = "Session Summary";

/// A summary post ready for publishing: title field plus text body
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncodedSummary {
    pub title: String,
    pub content: String,
}

/// Best-effort structured view of a summary post body.
///
/// Every field is independently absent-able: arbitrary text decodes to an
/// empty exercise list with no volume and no notes rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSummary {
    /// Raw text after the `Total Volume:` colon, unit suffix retained
    pub total_volume: Option<String>,
    pub exercises: Vec<ExerciseSummary>,
    /// `None` when the `Notes:` marker is absent - distinct from a
    /// present-but-empty notes block.
    pub notes: Option<String>,
}

impl ParsedSummary {
    /// Leading numeric portion of the volume text, if one parses
    pub fn volume_lbs(&self) -> Option<f64> {
        let raw = self.total_volume.as_deref()?.trim();
        let numeric: String = raw
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        numeric.parse().ok()
    }
}

/// One exercise recovered from a summary body: its name and the raw
/// (bullet-stripped) set lines beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExerciseSummary {
    pub name: String,
    pub sets: Vec<String>,
}

/// Encode a completed session as a summary post.
///
/// Title: `Completed {plan} ({date})`. Body: the marker line, a one-decimal
/// total volume, the grouped exercises block, and a notes block holding
/// either the session notes or the [`NO_NOTES_SENTINEL`] literal. Lossy by
/// design: nothing beyond weight, reps, and order survives per set.
pub fn encode(session: &WorkoutSessionResult) -> EncodedSummary {
    let title = format!("Completed {} ({})", session.plan_name, session.session_date);

    let mut content = String::new();
    content.push_str(SUMMARY_HEADER);
    content.push('\n');
    let _ = writeln!(content, "Total Volume: {:.1} lbs", session.total_volume());
    content.push('\n');
    content.push_str("Exercises:\n");
    for (i, exercise) in session.exercises.iter().enumerate() {
        if i > 0 {
            content.push('\n');
        }
        content.push_str(&exercise.name);
        content.push('\n');
        for (n, set) in exercise.sets.iter().enumerate() {
            let _ = writeln!(
                content,
                "- Set {}: {} reps @ {:.1} lbs",
                n + 1,
                set.reps,
                set.weight
            );
        }
    }
    content.push('\n');
    content.push_str("Notes:\n");
    content.push_str(session.notes.as_deref().unwrap_or(NO_NOTES_SENTINEL));

    EncodedSummary { title, content }
}

/// Is this post a workout summary?
///
/// True when the title contains "completed" (case-insensitive) or the body
/// carries either historical summary marker.
pub fn is_workout_summary(title: &str, content: &str) -> bool {
    title.to_lowercase().contains("completed")
        || content.contains(LEGACY_SUMMARY_MARKER)
        || content.contains(SUMMARY_HEADER)
}

/// States of the exercise-block walk
enum BlockState {
    BeforeExercises,
    AwaitingHeaderOrSet,
}

/// Decode a summary post body into its structured parts.
///
/// Line-oriented: lines are trimmed and blank lines dropped. The volume is
/// whatever follows the first colon on the `total volume` line. The
/// exercise block runs from the `exercises:` marker to the `notes:` marker
/// (or end of text); within it a line that does not start with "set" or a
/// bullet opens a new exercise, and bullet/set lines attach to the current
/// one. Set lines with no preceding header are dropped. Notes are the
/// joined lines after the `notes:` marker, absent when the marker is.
pub fn decode(text: &str) -> ParsedSummary {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut summary = ParsedSummary::default();

    if let Some(line) = lines
        .iter()
        .find(|line| line.to_lowercase().contains("total volume"))
    {
        if let Some((_, rest)) = line.split_once(':') {
            summary.total_volume = Some(rest.trim().to_string());
        }
    }

    let notes_idx = lines
        .iter()
        .position(|line| line.to_lowercase().contains("notes:"));

    let mut state = BlockState::BeforeExercises;
    let mut current: Option<ExerciseSummary> = None;
    let block_end = notes_idx.unwrap_or(lines.len());

    for (idx, line) in lines.iter().enumerate().take(block_end) {
        match state {
            BlockState::BeforeExercises => {
                if line.to_lowercase().contains("exercises:") {
                    state = BlockState::AwaitingHeaderOrSet;
                }
            }
            BlockState::AwaitingHeaderOrSet => {
                let stripped = strip_bullet(line);
                let bulleted = stripped.len() != line.len();
                if stripped.to_lowercase().starts_with("set") {
                    match current.as_mut() {
                        Some(exercise) => exercise.sets.push(stripped.to_string()),
                        None => {
                            tracing::debug!("Dropping set line without a header at line {idx}")
                        }
                    }
                } else if bulleted {
                    // Legacy flattened form: one bullet line per exercise
                    if let Some(done) = current.take() {
                        summary.exercises.push(done);
                    }
                    current = Some(ExerciseSummary {
                        name: stripped.to_string(),
                        sets: Vec::new(),
                    });
                } else {
                    if let Some(done) = current.take() {
                        summary.exercises.push(done);
                    }
                    current = Some(ExerciseSummary {
                        name: (*line).to_string(),
                        sets: Vec::new(),
                    });
                }
            }
        }
    }
    if let Some(done) = current.take() {
        summary.exercises.push(done);
    }

    if let Some(idx) = notes_idx {
        let mut notes_lines: Vec<&str> = Vec::new();
        if let Some((_, rest)) = lines[idx].split_once(':') {
            let rest = rest.trim();
            if !rest.is_empty() {
                notes_lines.push(rest);
            }
        }
        notes_lines.extend(lines[idx + 1..].iter().copied());
        summary.notes = Some(notes_lines.join("\n").trim().to_string());
    }

    summary
}

/// Drop leading bullet/dash markers and surrounding whitespace
fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '-' | '*' | '\u{2022}') || c.is_whitespace())
        .trim()
}
