//! Human-readable time formatting.
//!
//! - relative strings: `"3 weeks ago"`, `"3 周前"`
//! - day labels: `"Today"`, `"Yesterday"`, `"今天"`, `"昨天"`, or `YYYY-MM-DD`
//! - fixed whole-hour timezone shifts
//! - natural calendar-day ranges for bucketed queries ("the last 7 days")
//!
//! Use [`TimeFormatter`] with explicit [`Settings`] and a [`Clock`], or the
//! process-wide functions in [`shared_settings`].

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Settings;
pub use formatter::TimeFormatter;
pub use locale::{Label, Locale};
pub use range::TimeRange;

pub mod clock;
pub mod config;
pub mod day;
pub mod errors;
pub mod formatter;
pub mod humanize;
pub mod locale;
pub mod range;
pub mod shared_settings;
pub mod timestamp;
pub mod timezone;
