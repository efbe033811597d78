use anyhow::Result;
use cadence_core::timezone::parse_date_key;
use chrono::{Duration, NaiveDate};

/// Parse a date argument: a YYYY-MM-DD date key, or one of the relative
/// keywords today/tomorrow/yesterday resolved against the business calendar.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        "yesterday" => Ok(today - Duration::days(1)),
        other => Ok(parse_date_key(other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_keys_and_keywords() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(parse_date_arg("2024-01-31", today).unwrap(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(parse_date_arg("today", today).unwrap(), today);
        assert_eq!(parse_date_arg("Tomorrow", today).unwrap(), today + Duration::days(1));
        assert!(parse_date_arg("next friday", today).is_err());
    }
}
