//! Process-wide settings.
//!
//! Set the locale and timezone offset once at startup, then call the free
//! functions from anywhere. Each call snapshots the current settings and reads
//! the system clock. Code that needs a different clock or per-call settings
//! should build its own [`TimeFormatter`] instead.

use std::fmt::Display;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    clock::SystemClock, config::Settings, formatter::TimeFormatter, locale::Locale,
    range::TimeRange,
};

static SETTINGS: RwLock<Settings> = RwLock::new(Settings {
    locale: Locale::Cn,
    timezone_offset: 0,
});

// Settings has no invalid states; a poisoned lock still holds a usable value
fn read() -> RwLockReadGuard<'static, Settings> {
    SETTINGS.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Settings> {
    SETTINGS.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn settings() -> Settings {
    *read()
}

pub fn set_settings(settings: Settings) {
    log::info!(
        "Using locale {} with timezone offset {}",
        settings.locale,
        settings.timezone_offset
    );
    *write() = settings;
}

pub fn locale() -> Locale {
    read().locale
}

pub fn set_locale(locale: Locale) {
    log::info!("Using locale {}", locale);
    write().locale = locale;
}

pub fn timezone_offset() -> i32 {
    read().timezone_offset
}

pub fn set_timezone_offset(hours: i32) {
    log::info!("Using timezone offset {}", hours);
    write().timezone_offset = hours;
}

/// A formatter bound to the current settings and the system clock.
pub fn formatter() -> TimeFormatter<SystemClock> {
    TimeFormatter::new(settings())
}

pub fn pretty_day<Tz: TimeZone>(then: &DateTime<Tz>) -> String {
    formatter().pretty_day(then)
}

pub fn humanize_time<Tz: TimeZone>(then: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    formatter().humanize_time(then)
}

pub fn humanize_time_cn<Tz: TimeZone>(then: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    formatter().humanize_time_cn(then)
}

pub fn local_time<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    formatter().local_time(t)
}

pub fn shift_timezone<Tz: TimeZone>(t: &DateTime<Tz>, hours: i32) -> DateTime<Tz> {
    crate::timezone::shift_timezone(t, hours)
}

pub fn nature_time_range_utc(years: i32, months: i32, days: i32) -> TimeRange {
    formatter().nature_time_range_utc(years, months, days)
}

pub fn nature_time_today_range_utc<Tz: TimeZone>(day: &DateTime<Tz>) -> TimeRange {
    formatter().nature_time_today_range_utc(day)
}

pub fn nature_time_today_end_utc() -> DateTime<Utc> {
    formatter().nature_time_today_end_utc()
}

pub fn nature_time_range(years: i32, months: i32, days: i32) -> TimeRange {
    formatter().nature_time_range(years, months, days)
}

pub fn nature_time_today_end() -> DateTime<Utc> {
    formatter().nature_time_today_end()
}
