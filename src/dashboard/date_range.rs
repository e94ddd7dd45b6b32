use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Boundaries derived from "now": all local midnights. Weeks start on
/// Monday; `end_of_month` is the last calendar day of the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRanges {
    pub today: NaiveDateTime,
    pub start_of_week: NaiveDateTime,
    pub start_of_month: NaiveDateTime,
    pub end_of_month: NaiveDateTime,
}

impl DateRanges {
    pub fn from_now(now: NaiveDateTime) -> Self {
        let today = midnight(now.date());
        let start_of_week = midnight(monday_on_or_before(now.date()));
        let start_of_month = midnight(now.date().with_day(1).unwrap_or_else(|| now.date()));
        let end_of_month = midnight(last_day_of_month(now.date()));
        Self {
            today,
            start_of_week,
            start_of_month,
            end_of_month,
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    let delta = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(delta)
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year(), date.month(), 28).unwrap());
    first_next - Duration::days(1)
}
