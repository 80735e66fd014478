//! # Range Descriptions
//!
//! Human-readable labels for time ranges, as shown in the analytics
//! dashboard header ("Jul 1 - 20, 2022" and friends).
//!
//! ## Formatting Rules
//! - same day                      -> "Jul 1, 2022"
//! - same year and month           -> "Jul 1 - 20, 2022"
//! - same year, different month    -> "Jun 27 - Jul 2, 2022"
//! - different year                -> "Apr 15, 2021 - Apr 15, 2022"
//! - simplified mode               -> start date only ("Jul 1, 2022")
//!
//! Month names are fixed English three-letter abbreviations, matching the
//! strings the remote statistics API hands back for period labels.

use chrono::{Datelike, NaiveDate};

/// Formats the span between two dates using the dashboard label rules.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use storehub_analytics::format::range_description;
///
/// let start = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2022, 8, 2).unwrap();
/// assert_eq!(range_description(start, end, false), "Jul 1 - Aug 2, 2022");
/// assert_eq!(range_description(start, end, true), "Jul 1, 2022");
/// ```
pub fn range_description(start: NaiveDate, end: NaiveDate, simplified: bool) -> String {
    if simplified || start == end {
        return single_date(start);
    }

    if start.year() == end.year() {
        if start.month() == end.month() {
            format!(
                "{} {} - {}, {}",
                month_abbr(start),
                start.day(),
                end.day(),
                start.year()
            )
        } else {
            format!(
                "{} {} - {} {}, {}",
                month_abbr(start),
                start.day(),
                month_abbr(end),
                end.day(),
                start.year()
            )
        }
    } else {
        format!("{} - {}", single_date(start), single_date(end))
    }
}

fn single_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_abbr(date), date.day(), date.year())
}

fn month_abbr(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_collapses_to_single_date() {
        assert_eq!(
            range_description(date(2022, 7, 1), date(2022, 7, 1), false),
            "Jul 1, 2022"
        );
    }

    #[test]
    fn test_simplified_shows_only_start_date() {
        assert_eq!(
            range_description(date(2022, 7, 1), date(2022, 7, 2), true),
            "Jul 1, 2022"
        );
    }

    #[test]
    fn test_same_month_elides_second_month() {
        assert_eq!(
            range_description(date(2022, 7, 1), date(2022, 7, 20), false),
            "Jul 1 - 20, 2022"
        );
    }

    #[test]
    fn test_same_year_different_month() {
        assert_eq!(
            range_description(date(2022, 7, 1), date(2022, 8, 2), false),
            "Jul 1 - Aug 2, 2022"
        );
        assert_eq!(
            range_description(date(2022, 6, 27), date(2022, 7, 2), false),
            "Jun 27 - Jul 2, 2022"
        );
    }

    #[test]
    fn test_different_year_spells_out_both_dates() {
        assert_eq!(
            range_description(date(2021, 4, 15), date(2022, 4, 15), false),
            "Apr 15, 2021 - Apr 15, 2022"
        );
    }
}
