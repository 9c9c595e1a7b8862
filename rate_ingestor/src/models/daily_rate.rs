//! Canonical in-memory representation of one trading day's exchange-rate
//! observation.
//!
//! This struct is the standard output of every
//! [`RateProvider`](crate::providers::RateProvider) implementation and maps
//! one-to-one onto the feed's wire records, so it derives both serde traits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily exchange-rate observation.
///
/// The feed serves these as a JSON array ordered descending by date (most
/// recent first). Consumers that need chronological order must reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRate {
    /// The calendar date of the observation. Comparisons are by calendar
    /// date, never time-of-day.
    pub date: NaiveDate,

    /// Closing rate for the day.
    pub price: f64,

    /// Lowest rate observed during the day.
    pub low: f64,

    /// Highest rate observed during the day.
    pub high: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_record() {
        let json = r#"{"date":"2024-05-01","price":585000.0,"low":581200.0,"high":590100.0}"#;
        let rate: DailyRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(rate.price, 585000.0);
        assert_eq!(rate.low, 581200.0);
        assert_eq!(rate.high, 590100.0);
    }

    #[test]
    fn deserializes_newest_first_array() {
        let json = r#"[
            {"date":"2024-05-02","price":586000,"low":584000,"high":590000},
            {"date":"2024-05-01","price":585000,"low":581200,"high":590100}
        ]"#;
        let rates: Vec<DailyRate> = serde_json::from_str(json).unwrap();
        assert_eq!(rates.len(), 2);
        assert!(rates[0].date > rates[1].date);
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"{"date":"05/01/2024","price":1.0,"low":1.0,"high":1.0}"#;
        assert!(serde_json::from_str::<DailyRate>(json).is_err());
    }
}
