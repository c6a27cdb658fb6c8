//! Parsing of the scalars users type into slash command options.

use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime};

fn invalid(message: String) -> Error {
    Error::InvalidInput { message }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(format!("'{input}' is not a date, use YYYY-MM-DD")))
}

/// Parses a `YYYY-MM` month into (year, month).
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    use chrono::Datelike;

    let first = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| invalid(format!("'{input}' is not a month, use YYYY-MM")))?;
    Ok((first.year(), first.month()))
}

/// Parses a `HH:MM` (or `HH:MM:SS`) time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| invalid(format!("'{input}' is not a time, use HH:MM")))
}

/// Parses an ISO weekday given as a number (1 = Monday) or an English name
/// or its three-letter abbreviation.
pub fn parse_weekday(input: &str) -> Result<i32> {
    const NAMES: [&str; 7] = [
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    let lowered = input.trim().to_lowercase();
    if let Ok(number) = lowered.parse::<i32>() {
        if (1..=7).contains(&number) {
            return Ok(number);
        }
    }

    NAMES
        .iter()
        .zip(1..)
        .find(|(name, _)| lowered.len() >= 3 && name.starts_with(lowered.as_str()))
        .map(|(_, number)| number)
        .ok_or_else(|| invalid(format!("'{input}' is not a weekday")))
}

/// Splits a comma-separated list of names, dropping blanks.
#[must_use]
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-06-03 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
        assert!(parse_date("03/06/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-06").unwrap(), (2024, 6));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("20:30:00").unwrap(),
            NaiveTime::from_hms_opt(20, 30, 0).unwrap()
        );
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("1").unwrap(), 1);
        assert_eq!(parse_weekday("Monday").unwrap(), 1);
        assert_eq!(parse_weekday("sun").unwrap(), 7);
        assert_eq!(parse_weekday("WED").unwrap(), 3);
        assert!(parse_weekday("8").is_err());
        assert!(parse_weekday("mo").is_err());
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("Ana, Lucia ,,  "), vec!["Ana", "Lucia"]);
        assert!(split_names("  ").is_empty());
    }
}
