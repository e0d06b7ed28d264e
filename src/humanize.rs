//! Relative time strings.
//!
//! A timestamp is compared with "now" and the absolute difference in whole
//! seconds is classified into a coarse [`Span`]. The classification is shared
//! by the English and Chinese renderings, only the wording differs:
//!
//! - `"30 seconds ago"` / `"30 秒前"`
//! - `"1 hour from now"` / `"1 小时以后"`
//! - `"3 weeks ago"` / `"3 周前"`
//!
//! Units are fixed approximations (a month is 30 days, a year 12 months).
//! Differences of 18 months or more are not expressed relatively; the
//! timestamp itself is printed instead.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::locale::Locale;

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;
pub const MONTH: i64 = 30 * DAY;
pub const YEAR: i64 = 12 * MONTH;

/// Format used once a difference is too large for a relative string.
pub const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

/// How far away a timestamp is, in the coarsest unit that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Now,
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    /// Anything from 12 up to (but excluding) 18 months.
    Year,
    /// Too far away for a relative string.
    Beyond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub span: Span,
    pub direction: Direction,
}

impl Elapsed {
    /// Classify `then` against `now`.
    pub fn between<Tz: TimeZone>(then: &DateTime<Tz>, now: DateTime<Utc>) -> Elapsed {
        let then_utc = then.with_timezone(&Utc);

        let (direction, diff) = if then_utc > now {
            (Direction::Future, then_utc.timestamp() - now.timestamp())
        } else {
            (Direction::Past, now.timestamp() - then_utc.timestamp())
        };

        Elapsed {
            span: Span::from_seconds(diff),
            direction,
        }
    }
}

impl Span {
    pub fn from_seconds(diff: i64) -> Span {
        match diff {
            d if d <= 0 => Span::Now,
            d if d <= 2 => Span::Seconds(1),
            d if d < MINUTE => Span::Seconds(d),

            d if d < 2 * MINUTE => Span::Minutes(1),
            d if d < HOUR => Span::Minutes(d / MINUTE),

            d if d < 2 * HOUR => Span::Hours(1),
            d if d < DAY => Span::Hours(d / HOUR),

            d if d < 2 * DAY => Span::Days(1),
            d if d < WEEK => Span::Days(d / DAY),

            d if d < 2 * WEEK => Span::Weeks(1),
            d if d < MONTH => Span::Weeks(d / WEEK),

            d if d < 2 * MONTH => Span::Months(1),
            d if d < YEAR => Span::Months(d / MONTH),

            d if d < 18 * MONTH => Span::Year,
            _ => Span::Beyond,
        }
    }
}

fn english(elapsed: Elapsed) -> Option<String> {
    let lbl = match elapsed.direction {
        Direction::Past => "ago",
        Direction::Future => "from now",
    };

    let text = match elapsed.span {
        Span::Now => "now".to_string(),
        Span::Seconds(1) => format!("1 second {}", lbl),
        Span::Seconds(n) => format!("{} seconds {}", n, lbl),
        Span::Minutes(1) => format!("1 minute {}", lbl),
        Span::Minutes(n) => format!("{} minutes {}", n, lbl),
        Span::Hours(1) => format!("1 hour {}", lbl),
        Span::Hours(n) => format!("{} hours {}", n, lbl),
        Span::Days(1) => format!("1 day {}", lbl),
        Span::Days(n) => format!("{} days {}", n, lbl),
        Span::Weeks(1) => format!("1 week {}", lbl),
        Span::Weeks(n) => format!("{} weeks {}", n, lbl),
        Span::Months(1) => format!("1 month {}", lbl),
        Span::Months(n) => format!("{} months {}", n, lbl),
        Span::Year => format!("1 year {}", lbl),
        Span::Beyond => return None,
    };
    Some(text)
}

fn chinese(elapsed: Elapsed) -> Option<String> {
    let lbl = match elapsed.direction {
        Direction::Past => "前",
        Direction::Future => "以后",
    };

    let text = match elapsed.span {
        Span::Now => "现在".to_string(),
        Span::Seconds(n) => format!("{} 秒{}", n, lbl),
        Span::Minutes(n) => format!("{} 分钟{}", n, lbl),
        Span::Hours(n) => format!("{} 小时{}", n, lbl),
        Span::Days(n) => format!("{} 天{}", n, lbl),
        Span::Weeks(n) => format!("{} 周{}", n, lbl),
        Span::Months(n) => format!("{} 个月{}", n, lbl),
        Span::Year => format!("1 年{}", lbl),
        Span::Beyond => return None,
    };
    Some(text)
}

/// Render `then` in its own zone with [`ABSOLUTE_FORMAT`].
pub fn absolute<Tz: TimeZone>(then: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    then.format(ABSOLUTE_FORMAT).to_string()
}

/// English relative string, e.g. `"3 weeks ago"`.
pub fn humanize_time<Tz: TimeZone>(then: &DateTime<Tz>, now: DateTime<Utc>) -> String
where
    Tz::Offset: Display,
{
    english(Elapsed::between(then, now)).unwrap_or_else(|| absolute(then))
}

/// Chinese relative string, e.g. `"3 周前"`.
pub fn humanize_time_cn<Tz: TimeZone>(then: &DateTime<Tz>, now: DateTime<Utc>) -> String
where
    Tz::Offset: Display,
{
    chinese(Elapsed::between(then, now)).unwrap_or_else(|| absolute(then))
}

/// Relative string in the given locale.
pub fn humanize<Tz: TimeZone>(then: &DateTime<Tz>, now: DateTime<Utc>, locale: Locale) -> String
where
    Tz::Offset: Display,
{
    match locale {
        Locale::En => humanize_time(then, now),
        Locale::Cn => humanize_time_cn(then, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    // Sunday, March 10, 2024, 12:00:00 UTC
    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn ago(seconds: i64) -> String {
        humanize_time(&(test_now() - Duration::seconds(seconds)), test_now())
    }

    fn ago_cn(seconds: i64) -> String {
        humanize_time_cn(&(test_now() - Duration::seconds(seconds)), test_now())
    }

    fn from_now(seconds: i64) -> String {
        humanize_time(&(test_now() + Duration::seconds(seconds)), test_now())
    }

    #[test]
    fn test_now_bucket() {
        assert_eq!(ago(0), "now");
        assert_eq!(ago_cn(0), "现在");
    }

    #[test]
    fn test_sub_second_future_is_now() {
        let then = test_now() + Duration::milliseconds(400);
        assert_eq!(humanize_time(&then, test_now()), "now");
        assert_eq!(humanize_time_cn(&then, test_now()), "现在");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(ago(1), "1 second ago");
        assert_eq!(ago(2), "1 second ago");
        assert_eq!(ago(3), "3 seconds ago");
        assert_eq!(ago(30), "30 seconds ago");
        assert_eq!(ago(59), "59 seconds ago");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(60), "1 minute ago");
        assert_eq!(ago(119), "1 minute ago");
        assert_eq!(ago(120), "2 minutes ago");
        assert_eq!(ago(HOUR - 1), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago(HOUR), "1 hour ago");
        assert_eq!(ago(2 * HOUR - 1), "1 hour ago");
        assert_eq!(ago(2 * HOUR), "2 hours ago");
        assert_eq!(ago(DAY - 1), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(ago(DAY), "1 day ago");
        assert_eq!(ago(2 * DAY), "2 days ago");
        assert_eq!(ago(WEEK - 1), "6 days ago");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(ago(WEEK), "1 week ago");
        assert_eq!(ago(2 * WEEK - 1), "1 week ago");
        assert_eq!(ago(2 * WEEK), "2 weeks ago");
        assert_eq!(ago(3 * WEEK), "3 weeks ago");
        // 29 days is still weeks, not a month
        assert_eq!(ago(MONTH - 1), "4 weeks ago");
    }

    #[test]
    fn test_months() {
        assert_eq!(ago(MONTH), "1 month ago");
        assert_eq!(ago(2 * MONTH - 1), "1 month ago");
        assert_eq!(ago(2 * MONTH), "2 months ago");
        assert_eq!(ago(YEAR - 1), "11 months ago");
    }

    #[test]
    fn test_year_and_beyond() {
        assert_eq!(ago(YEAR), "1 year ago");
        assert_eq!(ago(18 * MONTH - 1), "1 year ago");

        let then = test_now() - Duration::seconds(18 * MONTH);
        assert_eq!(humanize_time(&then, test_now()), "2022-09-17 12:00:00 +0000");
        assert_eq!(humanize_time_cn(&then, test_now()), "2022-09-17 12:00:00 +0000");
    }

    #[test]
    fn test_beyond_keeps_own_zone_and_fraction() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let then = tz.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(250);
        assert_eq!(
            humanize_time(&then, test_now()),
            "2020-01-02 03:04:05.250 +0800"
        );
    }

    #[test]
    fn test_future_direction() {
        assert_eq!(from_now(2), "1 second from now");
        assert_eq!(from_now(45), "45 seconds from now");
        assert_eq!(from_now(3 * HOUR), "3 hours from now");
        assert_eq!(from_now(WEEK), "1 week from now");

        let then = test_now() + Duration::seconds(5 * DAY);
        assert_eq!(humanize_time_cn(&then, test_now()), "5 天以后");
    }

    #[test]
    fn test_chinese_buckets() {
        assert_eq!(ago_cn(1), "1 秒前");
        assert_eq!(ago_cn(59), "59 秒前");
        assert_eq!(ago_cn(60), "1 分钟前");
        assert_eq!(ago_cn(10 * MINUTE), "10 分钟前");
        assert_eq!(ago_cn(HOUR), "1 小时前");
        assert_eq!(ago_cn(5 * HOUR), "5 小时前");
        assert_eq!(ago_cn(DAY), "1 天前");
        assert_eq!(ago_cn(3 * WEEK), "3 周前");
        assert_eq!(ago_cn(MONTH), "1 个月前");
        assert_eq!(ago_cn(7 * MONTH), "7 个月前");
        assert_eq!(ago_cn(YEAR), "1 年前");
    }

    #[test]
    fn test_buckets_only_get_coarser() {
        let rank = |span: Span| match span {
            Span::Now => 0,
            Span::Seconds(_) => 1,
            Span::Minutes(_) => 2,
            Span::Hours(_) => 3,
            Span::Days(_) => 4,
            Span::Weeks(_) => 5,
            Span::Months(_) => 6,
            Span::Year => 7,
            Span::Beyond => 8,
        };

        let mut last = 0;
        let mut seen = vec![];
        let mut diff = 0;
        while diff < 20 * MONTH {
            let r = rank(Span::from_seconds(diff));
            assert!(r >= last, "bucket went backwards at {}", diff);
            if r != last || seen.is_empty() {
                seen.push(r);
            }
            last = r;
            diff += if diff < DAY { 1 } else { HOUR };
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_humanize_dispatches_on_locale() {
        let then = test_now() - Duration::seconds(2 * DAY);
        assert_eq!(humanize(&then, test_now(), Locale::En), "2 days ago");
        assert_eq!(humanize(&then, test_now(), Locale::Cn), "2 天前");
    }

    #[test]
    fn test_then_in_other_zone() {
        // Same instant as 11:59:30 UTC, expressed at +08:00
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let then = tz.with_ymd_and_hms(2024, 3, 10, 19, 59, 30).unwrap();
        assert_eq!(humanize_time(&then, test_now()), "30 seconds ago");
    }
}
