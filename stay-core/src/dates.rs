use chrono::{Duration, Local, NaiveDate};

/// The local calendar date. All upcoming/past decisions in this engine are
/// date-only, anchored at local midnight; time of day never participates.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar days between check-in and check-out. Zero or negative for
/// an empty or inverted range; callers reject non-positive stays before
/// committing a booking.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// A bookable range starts today or later and spans at least one night.
pub fn is_valid_date_range(check_in: NaiveDate, check_out: NaiveDate, today: NaiveDate) -> bool {
    check_in >= today && check_out > check_in
}

pub fn is_upcoming(check_in: NaiveDate, today: NaiveDate) -> bool {
    check_in >= today
}

pub fn is_past(check_out: NaiveDate, today: NaiveDate) -> bool {
    check_out < today
}

/// Suggested check-in for an empty date picker: tomorrow.
pub fn default_check_in(today: NaiveDate) -> NaiveDate {
    today + Duration::days(1)
}

/// Suggested check-out: four days out, a three-night stay with the default
/// check-in.
pub fn default_check_out(today: NaiveDate) -> NaiveDate {
    today + Duration::days(4)
}
