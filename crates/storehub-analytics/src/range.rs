//! # Range Selection
//!
//! Comparable (current vs. previous) time windows for every analytics
//! selection type.
//!
//! ## How a Selection Becomes Two Ranges
//! ```text
//! SelectionType + reference instant + CalendarConfig
//!      │
//!      ▼
//! generate_selection_data()
//!      │
//!      ├──► current_range   (the queried period)
//!      ├──► previous_range  (the immediately preceding comparison period)
//!      └──► human descriptions for both
//! ```
//!
//! The "to-date" family compares partial periods on purpose: month-to-date
//! against the same slice of the previous month, week-to-date against the
//! same slice of the previous week, and so on. The "last-N" family compares
//! two whole periods. All boundary arithmetic happens in the wall-clock
//! frame of the reference instant's time zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    days_back, days_back_at, end_of_day, end_of_month, end_of_quarter, end_of_week, end_of_year,
    months_back_at, resolve_local, start_of_day, start_of_month, start_of_quarter, start_of_week,
    start_of_year, years_back_at,
};
use crate::error::{RangeError, RangeResult};
use crate::format::range_description;

// =============================================================================
// Calendar Configuration
// =============================================================================

/// Week-start configuration for range computations.
///
/// The time zone is not part of the config: it travels with the
/// `DateTime<Tz>` reference instants themselves, so two concurrent
/// computations can never trample each other's calendar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First day of the week (locale-dependent; ISO-8601 default).
    pub first_weekday: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            first_weekday: Weekday::Mon,
        }
    }
}

// =============================================================================
// Selection Type
// =============================================================================

/// The closed set of analytics range selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionType {
    Today,
    Yesterday,
    WeekToDate,
    LastWeek,
    MonthToDate,
    LastMonth,
    QuarterToDate,
    LastQuarter,
    YearToDate,
    LastYear,
    Custom,
}

impl SelectionType {
    /// All selection types, in dashboard display order.
    pub const ALL: [SelectionType; 11] = [
        SelectionType::Today,
        SelectionType::Yesterday,
        SelectionType::WeekToDate,
        SelectionType::LastWeek,
        SelectionType::MonthToDate,
        SelectionType::LastMonth,
        SelectionType::QuarterToDate,
        SelectionType::LastQuarter,
        SelectionType::YearToDate,
        SelectionType::LastYear,
        SelectionType::Custom,
    ];
}

// =============================================================================
// Time Range
// =============================================================================

/// An immutable closed time interval. Invariant: `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct TimeRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeRange<Tz> {
    /// Human label for this range, in the wall-clock frame of its zone.
    ///
    /// `simplified` collapses the label to the start date only.
    pub fn description(&self, simplified: bool) -> String {
        range_description(
            self.start.naive_local().date(),
            self.end.naive_local().date(),
            simplified,
        )
    }
}

// =============================================================================
// Range Selection
// =============================================================================

/// The result of a range computation: both windows plus their labels.
///
/// Constructed once per query and never mutated; the reporting layer holds
/// it immutably and discards it when the inputs change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct RangeSelection<Tz: TimeZone> {
    pub selection_type: SelectionType,
    pub current_range: TimeRange<Tz>,
    pub previous_range: TimeRange<Tz>,
    pub current_description: String,
    pub previous_description: String,
}

// A window in the wall-clock frame, before it is pinned to a zone.
type Window = (NaiveDateTime, NaiveDateTime);

impl SelectionType {
    /// Computes the current and previous ranges for this selection.
    ///
    /// `reference_start` is the "as of" instant driving the computation;
    /// `reference_end` is consulted only by [`SelectionType::Custom`].
    /// Both windows are produced in the time zone of `reference_start`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use storehub_analytics::{CalendarConfig, SelectionType};
    ///
    /// let now = Utc.with_ymd_and_hms(2022, 7, 1, 12, 0, 0).unwrap();
    /// let selection = SelectionType::Today
    ///     .generate_selection_data(now, now, &CalendarConfig::default())
    ///     .unwrap();
    /// assert_eq!(selection.current_range.end, now);
    /// ```
    pub fn generate_selection_data<Tz: TimeZone>(
        self,
        reference_start: DateTime<Tz>,
        reference_end: DateTime<Tz>,
        config: &CalendarConfig,
    ) -> RangeResult<RangeSelection<Tz>> {
        let tz = reference_start.timezone();
        let reference = reference_start.naive_local();
        let (current, previous) = match self {
            SelectionType::Today => today_windows(reference),
            SelectionType::Yesterday => yesterday_windows(reference),
            SelectionType::WeekToDate => week_to_date_windows(reference, config.first_weekday),
            SelectionType::LastWeek => last_week_windows(reference, config.first_weekday),
            SelectionType::MonthToDate => month_to_date_windows(reference),
            SelectionType::LastMonth => last_month_windows(reference),
            SelectionType::QuarterToDate => quarter_to_date_windows(reference),
            SelectionType::LastQuarter => last_quarter_windows(reference),
            SelectionType::YearToDate => year_to_date_windows(reference),
            SelectionType::LastYear => last_year_windows(reference),
            SelectionType::Custom => {
                custom_windows(reference.date(), reference_end.naive_local().date())?
            }
        };

        Ok(RangeSelection {
            selection_type: self,
            current_description: range_description(current.0.date(), current.1.date(), false),
            previous_description: range_description(previous.0.date(), previous.1.date(), false),
            current_range: pin(&tz, current),
            previous_range: pin(&tz, previous),
        })
    }
}

fn pin<Tz: TimeZone>(tz: &Tz, window: Window) -> TimeRange<Tz> {
    TimeRange {
        start: resolve_local(tz, window.0),
        end: resolve_local(tz, window.1),
    }
}

// =============================================================================
// Per-Selection Window Arithmetic
// =============================================================================

fn today_windows(reference: NaiveDateTime) -> (Window, Window) {
    let previous_reference = days_back_at(reference, 1);
    (
        (start_of_day(reference.date()), reference),
        (start_of_day(previous_reference.date()), previous_reference),
    )
}

fn yesterday_windows(reference: NaiveDateTime) -> (Window, Window) {
    (
        whole_day(days_back(reference.date(), 1)),
        whole_day(days_back(reference.date(), 2)),
    )
}

fn week_to_date_windows(reference: NaiveDateTime, first_weekday: Weekday) -> (Window, Window) {
    let previous_reference = days_back_at(reference, 7);
    (
        (
            start_of_day(start_of_week(reference.date(), first_weekday)),
            reference,
        ),
        (
            start_of_day(start_of_week(previous_reference.date(), first_weekday)),
            previous_reference,
        ),
    )
}

fn last_week_windows(reference: NaiveDateTime, first_weekday: Weekday) -> (Window, Window) {
    (
        whole_week(days_back(reference.date(), 7), first_weekday),
        whole_week(days_back(reference.date(), 14), first_weekday),
    )
}

fn month_to_date_windows(reference: NaiveDateTime) -> (Window, Window) {
    let previous_reference = months_back_at(reference, 1);
    (
        (start_of_day(start_of_month(reference.date())), reference),
        (
            start_of_day(start_of_month(previous_reference.date())),
            previous_reference,
        ),
    )
}

fn last_month_windows(reference: NaiveDateTime) -> (Window, Window) {
    (
        whole_month(months_back_at(reference, 1).date()),
        whole_month(months_back_at(reference, 2).date()),
    )
}

fn quarter_to_date_windows(reference: NaiveDateTime) -> (Window, Window) {
    let previous_reference = months_back_at(reference, 3);
    (
        (start_of_day(start_of_quarter(reference.date())), reference),
        (
            start_of_day(start_of_quarter(previous_reference.date())),
            previous_reference,
        ),
    )
}

fn last_quarter_windows(reference: NaiveDateTime) -> (Window, Window) {
    (
        whole_quarter(months_back_at(reference, 3).date()),
        whole_quarter(months_back_at(reference, 6).date()),
    )
}

fn year_to_date_windows(reference: NaiveDateTime) -> (Window, Window) {
    let previous_reference = years_back_at(reference, 1);
    (
        (start_of_day(start_of_year(reference.date())), reference),
        (
            start_of_day(start_of_year(previous_reference.date())),
            previous_reference,
        ),
    )
}

fn last_year_windows(reference: NaiveDateTime) -> (Window, Window) {
    (
        whole_year(years_back_at(reference, 1).date()),
        whole_year(years_back_at(reference, 2).date()),
    )
}

/// Previous window of a custom selection: the same number of days,
/// immediately preceding, with no gap and no overlap.
fn custom_windows(start: NaiveDate, end: NaiveDate) -> RangeResult<(Window, Window)> {
    if end < start {
        return Err(RangeError::InvertedCustomRange { start, end });
    }
    let day_span = (end - start).num_days() as u64;
    let previous_end = days_back(start, 1);
    let previous_start = days_back(previous_end, day_span);
    Ok((
        (start_of_day(start), end_of_day(end)),
        (start_of_day(previous_start), end_of_day(previous_end)),
    ))
}

fn whole_day(date: NaiveDate) -> Window {
    (start_of_day(date), end_of_day(date))
}

fn whole_week(date: NaiveDate, first_weekday: Weekday) -> Window {
    (
        start_of_day(start_of_week(date, first_weekday)),
        end_of_day(end_of_week(date, first_weekday)),
    )
}

fn whole_month(date: NaiveDate) -> Window {
    (
        start_of_day(start_of_month(date)),
        end_of_day(end_of_month(date)),
    )
}

fn whole_quarter(date: NaiveDate) -> Window {
    (
        start_of_day(start_of_quarter(date)),
        end_of_day(end_of_quarter(date)),
    )
}

fn whole_year(date: NaiveDate) -> Window {
    (
        start_of_day(start_of_year(date)),
        end_of_day(end_of_year(date)),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
