//! Chart-ready projection of a filtered rate series.
//!
//! The feed is newest-first; charts draw left to right, so both columns are
//! reversed to chronological order here. Label rendering is a policy at the
//! boundary ([`LabelFormatter`]), not chart logic: the default policy prints
//! Persian-calendar dates with Latin digits, matching what the charting
//! surface expects on its x axis.

use chrono::NaiveDate;
use rate_ingestor::models::DailyRate;
use serde::Serialize;

use crate::calendar;

/// Axis-label rendering policy.
pub trait LabelFormatter {
    /// Renders one axis label for the given calendar date.
    fn format_label(&self, date: NaiveDate) -> String;
}

/// Persian (Solar Hijri) calendar labels with Latin digits, `y/m/d`,
/// no zero padding (e.g. `1403/1/1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianLabelFormatter;

impl LabelFormatter for PersianLabelFormatter {
    fn format_label(&self, date: NaiveDate) -> String {
        match calendar::to_jalali(date) {
            Ok(j) => format!("{}/{}/{}", j.year, j.month, j.day),
            // Dates outside the supported Jalali window render as ISO.
            Err(_) => date.to_string(),
        }
    }
}

/// Label/value columns for the charting surface, both oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Projects a newest-first filtered series into chart columns, reversed to
/// chronological order for left-to-right rendering.
pub fn project(rates: &[DailyRate], formatter: &dyn LabelFormatter) -> ChartData {
    let labels = rates
        .iter()
        .rev()
        .map(|rate| formatter.format_label(rate.date))
        .collect();
    let values = rates.iter().rev().map(|rate| rate.price).collect();
    ChartData { labels, values }
}
