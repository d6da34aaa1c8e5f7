//! Date range used to filter expenses
//!
//! Both bounds are optional and inclusive. An unset bound leaves that side of
//! the range open.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An inclusive `[start, end]` range over calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with neither bound set
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Set the start bound
    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end bound
    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Check whether a date satisfies both bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all dates"),
            (Some(start), None) => write!(f, "from {}", start.format("%Y-%m-%d")),
            (None, Some(end)) => write!(f, "until {}", end.format("%Y-%m-%d")),
            (Some(start), Some(end)) => write!(
                f,
                "{} to {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let range = DateRange::unbounded();
        assert_eq!((range.start, range.end), (None, None));
        assert!(range.contains(NaiveDate::MIN));
        assert!(range.contains(NaiveDate::MAX));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::unbounded()
            .from(date(2024, 1, 10))
            .to(date(2024, 1, 31));
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_half_open_ranges() {
        let start_only = DateRange::unbounded().from(date(2024, 1, 10));
        assert!(start_only.contains(date(2030, 1, 1)));
        assert!(!start_only.contains(date(2024, 1, 1)));

        let end_only = DateRange::unbounded().to(date(2024, 1, 10));
        assert!(end_only.contains(date(1999, 1, 1)));
        assert!(!end_only.contains(date(2024, 1, 11)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(!range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2024, 1, 1)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(DateRange::unbounded().to_string(), "all dates");
        assert_eq!(
            DateRange::unbounded().from(date(2024, 1, 10)).to_string(),
            "from 2024-01-10"
        );
        assert_eq!(
            DateRange::unbounded()
                .from(date(2024, 1, 10))
                .to(date(2024, 1, 31))
                .to_string(),
            "2024-01-10 to 2024-01-31"
        );
    }
}
