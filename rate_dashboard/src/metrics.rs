//! Summary statistics over a filtered rate series.
//!
//! What this module provides:
//! - [`RateMetrics`]: the flat record of descriptive statistics the view
//!   renders next to the chart.
//! - [`RateMetrics::from_rates`]: the single entry point; a pure function of
//!   the filtered slice, recomputed from scratch on every range change.
//!
//! Conventions the formulas rely on:
//! - Input is in feed order, newest first. The periodic change metrics
//!   negate the raw `p[i] - p[i-k]` differences, which on a newest-first
//!   array yields the drift from the older to the newer observation.
//! - Standard deviation is the population form (divisor `n`, not `n - 1`).
//! - An empty slice is not an error. Ratio metrics come out as `NaN` and the
//!   min/max folds as `±Infinity`; those values are displayed as-is.

use rate_ingestor::models::DailyRate;
use serde::Serialize;

/// Descriptive statistics for one filtered slice of the rate series.
///
/// `Default` is the all-zero record shown before the first load completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateMetrics {
    /// Number of observations in the slice.
    pub days: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub median_price: f64,
    pub avg_price: f64,
    /// Population standard deviation of the prices.
    pub std_dev: f64,
    pub price_variance: f64,
    /// `max_price - min_price`.
    pub price_range: f64,
    pub mean_low: f64,
    pub mean_high: f64,
    /// Mean day-over-day drift (period 1).
    pub daily_changes: f64,
    /// Mean 30-day drift, sampled every 30 observations.
    pub monthly_changes: f64,
    /// Mean 365-day drift, sampled every 365 observations.
    pub yearly_changes: f64,
    /// Total percentage change across the slice endpoints.
    pub overall_growth_rate: f64,
    pub daily_growth_rate: f64,
    pub monthly_growth_rate: f64,
    pub yearly_growth_rate: f64,
}

impl RateMetrics {
    /// Computes the full metric tuple for a filtered slice, newest first.
    ///
    /// Never panics: short and empty slices produce the documented
    /// `0`/`NaN`/`±Infinity` edge values instead.
    pub fn from_rates(rates: &[DailyRate]) -> Self {
        let prices: Vec<f64> = rates.iter().map(|r| r.price).collect();
        let lows: Vec<f64> = rates.iter().map(|r| r.low).collect();
        let highs: Vec<f64> = rates.iter().map(|r| r.high).collect();

        let days = prices.len();
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let median_price = median(&prices);
        let avg_price = mean(&prices);
        let std_dev = std_dev(&prices, avg_price);

        let first = prices.first().copied().unwrap_or(f64::NAN);
        let last = prices.last().copied().unwrap_or(f64::NAN);
        let overall_growth_rate = ((last - first) / first) * 100.0;

        Self {
            days,
            min_price,
            max_price,
            median_price,
            avg_price,
            std_dev,
            price_variance: std_dev * std_dev,
            price_range: max_price - min_price,
            mean_low: mean(&lows),
            mean_high: mean(&highs),
            daily_changes: periodic_change(&prices, 1),
            monthly_changes: periodic_change(&prices, 30),
            yearly_changes: periodic_change(&prices, 365),
            overall_growth_rate,
            daily_growth_rate: growth_rate(&prices, days as f64),
            monthly_growth_rate: growth_rate(&prices, days as f64 / 30.0),
            yearly_growth_rate: growth_rate(&prices, days as f64 / 365.0),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle element of the sorted prices, or the mean of the two middle ones.
///
/// Sorts a copy; the caller's slice is never reordered.
fn median(prices: &[f64]) -> f64 {
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.is_empty() {
        f64::NAN
    } else if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

fn std_dev(prices: &[f64], avg: f64) -> f64 {
    let variance = prices
        .iter()
        .map(|price| (price - avg).powi(2))
        .sum::<f64>()
        / prices.len() as f64;
    variance.sqrt()
}

/// Mean of the negated `p[i] - p[i-period]` differences, stepping by the
/// period (1 for daily). Slices shorter than `period + 1` report `0`.
fn periodic_change(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period + 1 {
        return 0.0;
    }

    let mut changes = Vec::new();
    let mut i = period;
    while i < prices.len() {
        changes.push(prices[i] - prices[i - period]);
        i += period;
    }

    changes.iter().fold(0.0, |sum, change| sum - change) / changes.len() as f64
}

/// Compound percentage growth across the slice endpoints over `periods`.
///
/// `periods == 0` (empty slice) is a reproducible `NaN`, not an error.
fn growth_rate(prices: &[f64], periods: f64) -> f64 {
    let first = prices.first().copied().unwrap_or(f64::NAN);
    let last = prices.last().copied().unwrap_or(f64::NAN);
    ((last / first).powf(1.0 / periods) - 1.0) * 100.0
}
