use anyhow::Context;
use chrono::NaiveDate;

use crate::dashboard::today;

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    s.trim()
        .parse::<NaiveDate>()
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Resolves the viewed range from optional CLI arguments: a missing start
/// falls back to the configured default, a missing end to today.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    default_start: NaiveDate,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let start = match start {
        Some(s) => parse_date(s)?,
        None => default_start,
    };
    let end = match end {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-02-01").unwrap(), d(2024, 2, 1));
        assert_eq!(parse_date(" 2024-02-01 ").unwrap(), d(2024, 2, 1));
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("02/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn explicit_range_wins_over_defaults() {
        let (start, end) =
            resolve_range(Some("2024-01-15"), Some("2024-02-15"), d(2023, 11, 25)).unwrap();
        assert_eq!(start, d(2024, 1, 15));
        assert_eq!(end, d(2024, 2, 15));
    }

    #[test]
    fn missing_start_uses_the_configured_default() {
        let (start, end) = resolve_range(None, Some("2024-02-15"), d(2023, 11, 25)).unwrap();
        assert_eq!(start, d(2023, 11, 25));
        assert_eq!(end, d(2024, 2, 15));
    }

    #[test]
    fn missing_end_uses_today() {
        let (_, end) = resolve_range(Some("2024-01-15"), None, d(2023, 11, 25)).unwrap();
        assert_eq!(end, today());
    }
}
