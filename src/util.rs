use crate::error::{Result, StreakError};
use chrono::{DateTime, Local, NaiveDate};

/// Accepts `YYYY-MM-DD` or an RFC3339 timestamp; only the calendar date is kept.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    Err(StreakError::InvalidDate(input.to_string()))
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `Mar 5, 2024`, or `N/A` when there is no date.
pub fn format_day(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}
