//! # storehub-analytics: Date Range Engine
//!
//! Pure computation of comparable time windows for the analytics dashboard.
//! Given a reference instant, a selection type, and a week-start
//! configuration, the engine produces a "current" range, the immediately
//! preceding "previous" range of matching semantics, and human labels for
//! both.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Reporting UI ──► SelectionType::generate_selection_data()          │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                  RangeSelection                                     │
//! │                    ├── current_range ───► stats API query builder   │
//! │                    ├── previous_range ──► stats API query builder   │
//! │                    └── descriptions ────► dashboard header labels   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`range`] - Selection types, time ranges, and the range computation
//! - [`calendar`] - Value-based date arithmetic (period boundaries, shifts)
//! - [`format`] - Human-readable range labels
//! - [`error`] - The engine's single rejection case
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same inputs, same ranges - always
//! 2. **No Mutable Calendar**: every step is a value transformation, so
//!    concurrent computations need no isolation at all
//! 3. **Clamped Arithmetic**: month/quarter/year rollbacks land on the last
//!    valid day of the target month (Jan 31 - 1mo = end of February)
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use storehub_analytics::{CalendarConfig, SelectionType};
//!
//! let now = Utc.with_ymd_and_hms(2022, 7, 20, 12, 0, 0).unwrap();
//! let selection = SelectionType::MonthToDate
//!     .generate_selection_data(now, now, &CalendarConfig::default())
//!     .unwrap();
//!
//! assert_eq!(selection.current_description, "Jul 1 - 20, 2022");
//! assert_eq!(selection.previous_description, "Jun 1 - 20, 2022");
//! ```

pub mod calendar;
pub mod error;
pub mod format;
pub mod range;

pub use error::{RangeError, RangeResult};
pub use range::{CalendarConfig, RangeSelection, SelectionType, TimeRange};
