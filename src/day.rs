use chrono::{DateTime, NaiveDate, TimeZone};

use crate::locale::{Label, Locale};

/// Label a timestamp relative to `today`.
///
/// `then` is compared using its own calendar fields (the date in its own zone),
/// so a timestamp carried in a different zone than the one `today` was computed
/// in may land on the other side of a midnight boundary.
///
/// Returns the locale's "today" or "yesterday" label, otherwise `YYYY-MM-DD`.
pub fn pretty_day<Tz: TimeZone>(then: &DateTime<Tz>, today: NaiveDate, locale: Locale) -> String {
    let date = then.date_naive();

    if date == today {
        return locale.label(Label::Today).to_string();
    }
    if today.pred_opt() == Some(date) {
        return locale.label(Label::Yesterday).to_string();
    }
    date.format("%Y-%m-%d").to_string()
}
