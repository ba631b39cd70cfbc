use chrono::{Datelike, Duration, NaiveDate};

/// Weekday index used by availability rules, 0=Sunday..6=Saturday
///
/// The same convention is used everywhere a weekday is stored or compared.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Monday..Sunday span of the ISO week containing `date`, inclusive on both ends
pub fn week_span(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}
