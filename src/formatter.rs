//! [`TimeFormatter`] binds settings and a clock once and exposes every
//! operation as a method.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use prettytime::{FixedClock, Locale, Settings, TimeFormatter};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! let formatter = TimeFormatter::with_clock(Settings::new(Locale::En, 0), FixedClock(now));
//!
//! let then = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
//! assert_eq!(formatter.humanize_time(&then), "2 days ago");
//! assert_eq!(formatter.pretty_day(&then), "2024-03-08");
//! ```

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::{
    clock::{Clock, SystemClock},
    config::Settings,
    day, humanize,
    range::{self, TimeRange},
    timezone,
};

#[derive(Debug, Clone, Default)]
pub struct TimeFormatter<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
}

impl TimeFormatter<SystemClock> {
    pub fn new(settings: Settings) -> Self {
        TimeFormatter {
            settings,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TimeFormatter<C> {
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        TimeFormatter { settings, clock }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Today's date at the configured offset.
    pub fn today(&self) -> NaiveDate {
        timezone::local_time(&self.now(), &self.settings).date_naive()
    }

    /// "Today", "Yesterday" or `YYYY-MM-DD` in the configured locale.
    pub fn pretty_day<Tz: TimeZone>(&self, then: &DateTime<Tz>) -> String {
        day::pretty_day(then, self.today(), self.settings.locale)
    }

    pub fn humanize_time<Tz: TimeZone>(&self, then: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        humanize::humanize_time(then, self.now())
    }

    pub fn humanize_time_cn<Tz: TimeZone>(&self, then: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        humanize::humanize_time_cn(then, self.now())
    }

    /// Relative string in the configured locale.
    pub fn humanize<Tz: TimeZone>(&self, then: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        humanize::humanize(then, self.now(), self.settings.locale)
    }

    pub fn local_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTime<Tz> {
        timezone::local_time(t, &self.settings)
    }

    pub fn shift_timezone<Tz: TimeZone>(&self, t: &DateTime<Tz>, hours: i32) -> DateTime<Tz> {
        timezone::shift_timezone(t, hours)
    }

    pub fn nature_time_range_utc(&self, years: i32, months: i32, days: i32) -> TimeRange {
        range::nature_time_range_utc(
            self.now(),
            self.settings.timezone_offset,
            years,
            months,
            days,
        )
    }

    pub fn nature_time_today_range_utc<Tz: TimeZone>(&self, day: &DateTime<Tz>) -> TimeRange {
        range::nature_time_today_range_utc(day, self.settings.timezone_offset)
    }

    pub fn nature_time_today_end_utc(&self) -> DateTime<Utc> {
        range::nature_time_today_end_utc(self.now(), self.settings.timezone_offset)
    }

    pub fn nature_time_range(&self, years: i32, months: i32, days: i32) -> TimeRange {
        range::nature_time_range(self.now(), years, months, days)
    }

    pub fn nature_time_today_end(&self) -> DateTime<Utc> {
        range::nature_time_today_end(self.now())
    }
}
