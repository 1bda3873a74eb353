//! Closed date ranges.
//!
//! Reservations occupy their start and end instants inclusively, so two ranges that
//! merely touch (`a.end == b.start`) still overlap. The reservation repository expresses
//! the same predicate in SQL (`start_date <= end AND end_date >= start`).

use chrono::{DateTime, Utc};

/// A validated `[start, end]` range with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range, returning `None` when `end` is not strictly after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if end <= start {
            return None;
        }

        Some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true when both ranges share at least one instant.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}
