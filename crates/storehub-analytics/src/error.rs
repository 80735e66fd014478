//! # Error Types
//!
//! The range engine is total over well-formed dates; the single thing it
//! refuses is a custom range whose end precedes its start. That input gets
//! a typed error rather than a silently swapped or clamped range.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the date range engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Custom selection where the end date precedes the start date.
    #[error("custom range end {end} precedes start {start}")]
    InvertedCustomRange { start: NaiveDate, end: NaiveDate },
}

/// Convenience type alias for Results with RangeError.
pub type RangeResult<T> = Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = RangeError::InvertedCustomRange {
            start: NaiveDate::from_ymd_opt(2022, 12, 7).unwrap(),
            end: NaiveDate::from_ymd_opt(2022, 12, 5).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "custom range end 2022-12-05 precedes start 2022-12-07"
        );
    }
}
