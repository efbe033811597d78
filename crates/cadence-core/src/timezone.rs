use crate::error::CoreError;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Business timezone used when none is configured. "Due today" is evaluated
/// against this calendar, not the server clock's.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Validate an IANA timezone name.
pub fn parse_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone).map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))
}

/// The current calendar date in the given timezone.
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}

/// Canonical YYYY-MM-DD key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| CoreError::Validation(format!("invalid date key '{}', expected YYYY-MM-DD", key)))
}
