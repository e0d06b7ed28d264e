use chrono::{DateTime, Duration, TimeZone};

use crate::config::Settings;

/// Advance `t` by `hours` whole hours. The zone of `t` is kept.
pub fn shift_timezone<Tz: TimeZone>(t: &DateTime<Tz>, hours: i32) -> DateTime<Tz> {
    t.clone() + Duration::hours(i64::from(hours))
}

/// Shift `t` by the configured timezone offset.
pub fn local_time<Tz: TimeZone>(t: &DateTime<Tz>, settings: &Settings) -> DateTime<Tz> {
    shift_timezone(t, settings.timezone_offset)
}
