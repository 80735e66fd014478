//! # Calendar Arithmetic
//!
//! Value-based date helpers underpinning the range engine.
//!
//! Every function here takes and returns immutable chrono values. There is
//! deliberately no calendar object to reposition: the hazards of a shared
//! mutable scratch calendar (concurrent reuse, leftover state) cannot exist
//! when each step is a pure value transformation.
//!
//! ## Conventions
//! - "Start of" boundaries land on the first instant of the period
//!   (00:00:00.000 wall-clock time).
//! - "End of" boundaries land on the last representable millisecond
//!   (23:59:59.999), matching the millisecond precision of the instants the
//!   reporting layer works with.
//! - Backward month/quarter/year shifts clamp the day-of-month to the last
//!   valid day of the target month (Jan 31 minus one month is the last day
//!   of February, never an overflow into March).

use chrono::{
    DateTime, Datelike, Days, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Weekday,
};

// =============================================================================
// Day Boundaries
// =============================================================================

/// First instant of the given day (00:00:00.000).
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last millisecond of the given day (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(last_millisecond())
}

fn last_millisecond() -> NaiveTime {
    // Literal wall-clock constant, always representable.
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid wall-clock constant")
}

// =============================================================================
// Week / Month / Quarter / Year Boundaries
// =============================================================================

/// First day of the week containing `date`, for the configured week start.
pub fn start_of_week(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    let days_into_week = (date.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    days_back(date, u64::from(days_into_week))
}

/// Last day of the week containing `date`, for the configured week start.
pub fn end_of_week(date: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    start_of_week(date, first_weekday)
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date` (28/29/30/31 as appropriate).
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the calendar quarter containing `date`.
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let quarter_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), quarter_month, 1).unwrap_or(date)
}

/// Last day of the calendar quarter containing `date`.
pub fn end_of_quarter(date: NaiveDate) -> NaiveDate {
    start_of_quarter(date)
        .checked_add_months(Months::new(3))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// January 1st of the year containing `date`.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// December 31st of the year containing `date`.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

// =============================================================================
// Backward Shifts
// =============================================================================

/// `date` shifted back by whole days. Saturates at the calendar floor.
pub fn days_back(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// `instant` shifted back by whole days, preserving the time of day.
pub fn days_back_at(instant: NaiveDateTime, days: u64) -> NaiveDateTime {
    instant
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDateTime::MIN)
}

/// `instant` shifted back by whole months, preserving the time of day and
/// clamping the day-of-month to the last valid day of the target month.
pub fn months_back_at(instant: NaiveDateTime, months: u32) -> NaiveDateTime {
    instant
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MIN)
}

/// `instant` shifted back by whole years. Feb 29 lands on Feb 28 when the
/// target year is not a leap year.
pub fn years_back_at(instant: NaiveDateTime, years: u32) -> NaiveDateTime {
    months_back_at(instant, years * 12)
}

// =============================================================================
// Local-Time Resolution
// =============================================================================

/// Pins a local wall-clock value to the given time zone, totally.
///
/// DST folds resolve to the earlier of the two instants. Wall-clock values
/// that fall into a spring-forward gap resolve to the first representable
/// minute after the gap, so a `start_of_day` that lands in a midnight gap
/// stays inside its own local day instead of sliding into the previous one.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _latest) => earliest,
        LocalResult::None => {
            // Spring-forward gap. Walk the wall clock forward one minute at
            // a time until it exists again; tzdb gaps are minute-aligned
            // and at most two hours.
            let mut probe = local;
            for _ in 0..180 {
                probe += TimeDelta::minutes(1);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(instant) => return instant,
                    LocalResult::Ambiguous(earliest, _latest) => return earliest,
                    LocalResult::None => {}
                }
            }
            tz.from_utc_datetime(&local)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
