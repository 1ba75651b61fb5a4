//! Volume analytics: session volume grouped by reporting range.
//!
//! Backs the progress charts: each completed session contributes one
//! volume point, and points are bucketed into week, month, or
//! year-to-date keys before charting.

use crate::{Error, Result, WorkoutSessionResult};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Reporting range for volume grouping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    /// Buckets keyed by week start (Sunday), as an ISO date
    Weekly,
    /// Buckets keyed by `YYYY-MM`
    Monthly,
    /// Current-year months, keyed by zero-padded month number
    YearToDate,
    /// Full history, keyed by `YYYY-MM`
    All,
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Range::Weekly),
            "monthly" => Ok(Range::Monthly),
            "ytd" => Ok(Range::YearToDate),
            "all" => Ok(Range::All),
            other => Err(Error::Config(format!(
                "Unknown range '{}' (expected weekly, monthly, ytd, all)",
                other
            ))),
        }
    }
}

/// One session's contribution to the volume chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume: f64,
}

/// Reduce sessions to their chartable volume points
pub fn session_points(sessions: &[WorkoutSessionResult]) -> Vec<VolumePoint> {
    sessions
        .iter()
        .map(|session| VolumePoint {
            date: session.session_date,
            volume: session.total_volume(),
        })
        .collect()
}

/// Group volume points into ordered range buckets.
///
/// `today` anchors the year-to-date filter; points from other years are
/// skipped for [`Range::YearToDate`] and kept everywhere else.
pub fn group_volume(
    points: &[VolumePoint],
    range: Range,
    today: NaiveDate,
) -> BTreeMap<String, f64> {
    let mut grouped = BTreeMap::new();

    for point in points {
        let key = match range {
            Range::Weekly => {
                let offset = i64::from(point.date.weekday().num_days_from_sunday());
                (point.date - Duration::days(offset)).format("%Y-%m-%d").to_string()
            }
            Range::Monthly | Range::All => point.date.format("%Y-%m").to_string(),
            Range::YearToDate => {
                if point.date.year() != today.year() {
                    continue;
                }
                point.date.format("%m").to_string()
            }
        };
        *grouped.entry(key).or_insert(0.0) += point.volume;
    }

    grouped
}
