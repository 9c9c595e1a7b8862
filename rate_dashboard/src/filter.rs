//! Inclusive date-range filtering over a rate series.

use chrono::NaiveDate;
use rate_ingestor::models::DailyRate;

/// Retains exactly the records whose date `d` satisfies `start <= d <= end`,
/// inclusive on both ends, comparing calendar dates only.
///
/// Preserves the original relative order. An empty result is valid; every
/// downstream consumer must cope with it.
pub fn filter_by_date_range(
    rates: &[DailyRate],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyRate> {
    rates
        .iter()
        .filter(|rate| rate.date >= start && rate.date <= end)
        .cloned()
        .collect()
}
