#![forbid(unsafe_code)]

//! Core domain model and business logic for the Repforge workout engine.
//!
//! This crate provides:
//! - The exercise catalog (day types and movement-class buckets)
//! - The quota-bound random workout generator
//! - The workout summary codec (session results to post text and back)
//! - Volume analytics for progress charts

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use analytics::{group_volume, session_points, Range, VolumePoint};
pub use catalog::{build_default_catalog, flatten, get_default_catalog, ExerciseCatalog};
pub use config::Config;
pub use error::{Error, Result};
pub use generator::{generate, generate_default, normalize, normalize_generated};
pub use summary::{decode, encode, is_workout_summary, EncodedSummary, ExerciseSummary, ParsedSummary};
pub use types::*;
