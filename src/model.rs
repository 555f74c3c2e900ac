//! Core data types for the planner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry on a timeline: a labeled date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Unique id (e.g., "ms-4k2j9x"). Assigned at creation, immutable.
    pub id: String,

    /// Group label, the chart's category axis value.
    pub timeline: String,

    /// Display title.
    pub title: String,

    /// First day of the range.
    pub start: NaiveDate,

    /// Last day of the range. Not required to follow `start`.
    pub end: NaiveDate,
}

impl Milestone {
    /// Span length in days. Negative when `end` precedes `start`; the
    /// store does not order-check the two dates.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Raw form field values, exactly as typed.
///
/// A draft is always a copy of field text, never a reference into the
/// stored list, so edits stay staged until commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub timeline: String,
    pub title: String,
    pub start: String,
    pub end: String,
}
