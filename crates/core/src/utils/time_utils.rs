use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::DATE_FORMAT;
use crate::errors::Result;

/// Parses a `YYYY-MM-DD` calendar date as stored in the database.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses an RFC 3339 instant, as written by [`format_timestamp`].
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value.trim())?.with_timezone(&Utc))
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_text_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date(date), "2024-02-29");
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("29/02/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_timestamp_is_normalized_to_utc() {
        let parsed = parse_timestamp("2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
        assert_eq!(parse_timestamp(&format_timestamp(parsed)).unwrap(), parsed);
    }
}
