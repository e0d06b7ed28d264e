//! Natural calendar-day ranges.
//!
//! A natural range always ends at a UTC midnight (optionally moved by the
//! configured timezone offset) and starts a whole number of calendar units
//! earlier. Ranges are start-inclusive and end-exclusive, so `(0, 0, 0)` is
//! exactly "today" and `(0, 0, -6)` is "the last 7 days including today".

use std::fmt::Display;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::timezone::shift_timezone;

/// A half-open `[start, end)` interval in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange { start, end }
    }

    /// Check if a timestamp falls within this range. The start is included,
    /// the end is not.
    pub fn contains<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        let t = t.with_timezone(&Utc);
        t >= self.start && t < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn into_tuple(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

/// Midnight (UTC) of the UTC calendar day containing `t`.
fn utc_midnight<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Utc> {
    t.with_timezone(&Utc)
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or_else(|| t.with_timezone(&Utc))
}

/// Add calendar deltas to `t`, normalizing overflowing fields instead of
/// clamping them: January 31 plus one month is March 2 (or 3 in a non-leap
/// year), not February 28. Time of day is kept.
pub fn add_date(t: DateTime<Utc>, years: i32, months: i32, days: i32) -> DateTime<Utc> {
    let total_months =
        i64::from(t.year() + years) * 12 + i64::from(t.month0()) + i64::from(months);
    let year = total_months.div_euclid(12) as i32;
    let month = total_months.rem_euclid(12) as u32 + 1;

    let first_of_month = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return t,
    };

    let date = first_of_month + Duration::days(i64::from(t.day0()) + i64::from(days));
    date.and_time(t.time()).and_utc()
}

/// End of "today" in UTC: midnight at the start of tomorrow.
pub fn nature_time_today_end(now: DateTime<Utc>) -> DateTime<Utc> {
    utc_midnight(&(now + Duration::days(1)))
}

/// End of "today" moved back by `offset` hours.
pub fn nature_time_today_end_utc(now: DateTime<Utc>, offset: i32) -> DateTime<Utc> {
    shift_timezone(&nature_time_today_end(now), -offset)
}

/// From the given calendar deltas before today up to the end of today.
pub fn nature_time_range(now: DateTime<Utc>, years: i32, months: i32, days: i32) -> TimeRange {
    let end = nature_time_today_end(now);
    let start = add_date(end, years, months, days - 1);
    TimeRange::new(start, end)
}

/// Like [`nature_time_range`] with both bounds moved back by `offset` hours.
pub fn nature_time_range_utc(
    now: DateTime<Utc>,
    offset: i32,
    years: i32,
    months: i32,
    days: i32,
) -> TimeRange {
    let end = nature_time_today_end_utc(now, offset);
    let start = add_date(end, years, months, days - 1);
    TimeRange::new(start, end)
}

/// The UTC calendar day containing `day`, both bounds moved back by `offset` hours.
pub fn nature_time_today_range_utc<Tz: TimeZone>(day: &DateTime<Tz>, offset: i32) -> TimeRange {
    let end = shift_timezone(&utc_midnight(&(day.clone() + Duration::days(1))), -offset);
    let start = shift_timezone(&utc_midnight(day), -offset);
    TimeRange::new(start, end)
}
