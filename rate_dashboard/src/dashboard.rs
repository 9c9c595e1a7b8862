//! View state: orchestrates fetch → filter → metrics → chart.
//!
//! The [`Dashboard`] owns a boxed [`RateProvider`] and the derived view
//! state. Both triggers (the initial load and a date-range change) re-fetch
//! the full series and re-run the synchronous pipeline; there is no caching
//! between triggers.
//!
//! Rapid range changes can leave an older fetch in flight when a newer one
//! is issued. Every fetch is tagged with a monotonically increasing
//! sequence number and a response only commits if no newer request has been
//! issued or committed since; stale responses are logged and dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use rate_ingestor::{models::DailyRate, providers::RateProvider};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{
    chart::{self, ChartData, LabelFormatter, PersianLabelFormatter},
    config::DashboardConfig,
    filter::filter_by_date_range,
    metrics::RateMetrics,
};

/// Today's calendar date, the default end of the viewed range.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Default)]
struct ViewState {
    start: NaiveDate,
    end: NaiveDate,
    filtered: Vec<DailyRate>,
    metrics: RateMetrics,
    chart: ChartData,
    /// Sequence number of the fetch that produced this state.
    committed_seq: u64,
}

/// Holds the active date range and the state derived from the last
/// committed fetch.
pub struct Dashboard {
    provider: Arc<dyn RateProvider + Send + Sync>,
    config: DashboardConfig,
    formatter: Box<dyn LabelFormatter + Send + Sync>,
    fetch_seq: AtomicU64,
    state: RwLock<ViewState>,
}

impl Dashboard {
    /// A dashboard over the given provider, ranged from the configured
    /// start date through today.
    pub fn new(provider: Arc<dyn RateProvider + Send + Sync>, config: DashboardConfig) -> Self {
        let state = ViewState {
            start: config.default_start_date,
            end: today(),
            ..ViewState::default()
        };
        Self {
            provider,
            config,
            formatter: Box::new(PersianLabelFormatter),
            fetch_seq: AtomicU64::new(0),
            state: RwLock::new(state),
        }
    }

    /// Replaces the label-rendering policy.
    pub fn with_formatter(mut self, formatter: Box<dyn LabelFormatter + Send + Sync>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Initial load over the active range.
    ///
    /// Returns whether the response was committed (`false` means a newer
    /// request superseded this one mid-flight).
    pub async fn load(&self) -> anyhow::Result<bool> {
        let (start, end) = self.date_range().await;
        self.refresh(start, end).await
    }

    /// Re-fetches and recomputes for a new date range.
    pub async fn set_date_range(&self, start: NaiveDate, end: NaiveDate) -> anyhow::Result<bool> {
        self.refresh(start, end).await
    }

    async fn refresh(&self, start: NaiveDate, end: NaiveDate) -> anyhow::Result<bool> {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let rates = self
            .provider
            .fetch_rates()
            .await
            .context("failed to fetch rate series")?;

        // Cheap early-out before doing any work on a superseded response.
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding stale rate response");
            return Ok(false);
        }

        let filtered = filter_by_date_range(&rates, start, end);
        let metrics = RateMetrics::from_rates(&filtered);
        let chart = chart::project(&filtered, self.formatter.as_ref());

        let mut state = self.state.write().await;
        if seq <= state.committed_seq {
            debug!(seq, committed = state.committed_seq, "discarding stale rate response");
            return Ok(false);
        }
        info!(days = metrics.days, %start, %end, "recomputed dashboard state");
        *state = ViewState {
            start,
            end,
            filtered,
            metrics,
            chart,
            committed_seq: seq,
        };
        Ok(true)
    }

    /// The active date range.
    pub async fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let state = self.state.read().await;
        (state.start, state.end)
    }

    /// Statistics for the last committed range.
    pub async fn metrics(&self) -> RateMetrics {
        self.state.read().await.metrics.clone()
    }

    /// Chart columns for the last committed range.
    pub async fn chart(&self) -> ChartData {
        self.state.read().await.chart.clone()
    }

    /// The filtered records behind the current metrics, newest first.
    pub async fn filtered_rates(&self) -> Vec<DailyRate> {
        self.state.read().await.filtered.clone()
    }

    /// Projects an initial amount through the overall growth rate; with no
    /// argument, the configured default amount is used.
    pub async fn adjusted_value(&self, initial: Option<f64>) -> f64 {
        let initial = initial.unwrap_or(self.config.default_initial_value);
        let growth = self.state.read().await.metrics.overall_growth_rate;
        initial * (1.0 + growth / 100.0)
    }
}
