use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use rate_dashboard::config::DashboardConfig;
use rate_dashboard::dashboard::Dashboard;
use rate_ingestor::models::DailyRate;
use rate_ingestor::providers::{ProviderError, RateProvider};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rate(date: NaiveDate, price: f64) -> DailyRate {
    DailyRate {
        date,
        price,
        low: price - 1.0,
        high: price + 1.0,
    }
}

fn sample_series() -> Vec<DailyRate> {
    // Newest first, like the feed.
    vec![
        rate(d(2024, 3, 1), 105.0),
        rate(d(2024, 2, 1), 110.0),
        rate(d(2024, 1, 1), 100.0),
    ]
}

fn test_config() -> DashboardConfig {
    DashboardConfig {
        feed_url: "http://localhost/rates.json".into(),
        default_start_date: d(2024, 1, 1),
        default_initial_value: 100_000_000.0,
    }
}

struct FixedFeed(Vec<DailyRate>);

#[async_trait]
impl RateProvider for FixedFeed {
    async fn fetch_rates(&self) -> Result<Vec<DailyRate>, ProviderError> {
        Ok(self.0.clone())
    }
}

/// Blocks the first fetch on a gate so a second request can overtake it.
struct GatedFeed {
    data: Vec<DailyRate>,
    started: Arc<Notify>,
    gate: Arc<Notify>,
    calls: AtomicUsize,
}

#[async_trait]
impl RateProvider for GatedFeed {
    async fn fetch_rates(&self) -> Result<Vec<DailyRate>, ProviderError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.started.notify_one();
            self.gate.notified().await;
        }
        Ok(self.data.clone())
    }
}

#[tokio::test]
async fn load_runs_the_full_pipeline() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config());

    // Default range starts 2024-01-01; pin the end so the assertions don't
    // depend on the wall clock.
    let committed = dashboard.set_date_range(d(2024, 1, 1), d(2024, 3, 1)).await.unwrap();
    assert!(committed);

    let m = dashboard.metrics().await;
    assert_eq!(m.days, 3);
    assert_eq!(m.min_price, 100.0);
    assert_eq!(m.max_price, 110.0);
    assert_eq!(m.median_price, 105.0);
    assert_eq!(m.avg_price, 105.0);

    let chart = dashboard.chart().await;
    assert_eq!(chart.values, vec![100.0, 110.0, 105.0]);
    assert_eq!(chart.labels.len(), 3);
}

#[tokio::test]
async fn load_uses_the_configured_default_range() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config());

    let committed = dashboard.load().await.unwrap();
    assert!(committed);

    // Configured start through today covers the whole sample.
    let (start, _) = dashboard.date_range().await;
    assert_eq!(start, d(2024, 1, 1));
    assert_eq!(dashboard.metrics().await.days, 3);
}

#[tokio::test]
async fn range_change_refilters_and_recomputes() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config());

    dashboard.set_date_range(d(2024, 1, 15), d(2024, 2, 15)).await.unwrap();

    let filtered = dashboard.filtered_rates().await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, d(2024, 2, 1));
    assert_eq!(dashboard.metrics().await.days, 1);
    assert_eq!(dashboard.date_range().await, (d(2024, 1, 15), d(2024, 2, 15)));
}

#[tokio::test]
async fn empty_range_yields_edge_values_not_errors() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config());

    dashboard.set_date_range(d(2030, 1, 1), d(2030, 12, 31)).await.unwrap();

    let m = dashboard.metrics().await;
    assert_eq!(m.days, 0);
    assert!(m.avg_price.is_nan());
    assert!(dashboard.chart().await.values.is_empty());
}

#[tokio::test]
async fn adjusted_value_projects_the_overall_growth() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config());
    dashboard.set_date_range(d(2024, 1, 1), d(2024, 3, 1)).await.unwrap();

    // Overall growth on the newest-first slice [105, 110, 100]:
    // ((100 - 105) / 105) * 100.
    let adjusted = dashboard.adjusted_value(Some(100.0)).await;
    assert!((adjusted - 100.0 * (100.0 / 105.0)).abs() < 1e-9);

    let default_adjusted = dashboard.adjusted_value(None).await;
    assert!((default_adjusted - 100_000_000.0 * (100.0 / 105.0)).abs() < 1e-3);
}

struct IsoFormatter;

impl rate_dashboard::chart::LabelFormatter for IsoFormatter {
    fn format_label(&self, date: NaiveDate) -> String {
        date.to_string()
    }
}

#[tokio::test]
async fn label_policy_is_pluggable() {
    let dashboard = Dashboard::new(Arc::new(FixedFeed(sample_series())), test_config())
        .with_formatter(Box::new(IsoFormatter));
    dashboard.set_date_range(d(2024, 1, 1), d(2024, 3, 1)).await.unwrap();

    assert_eq!(
        dashboard.chart().await.labels,
        vec!["2024-01-01", "2024-02-01", "2024-03-01"]
    );
}

#[tokio::test]
async fn stale_response_is_discarded() {
    let started = Arc::new(Notify::new());
    let gate = Arc::new(Notify::new());
    let provider = Arc::new(GatedFeed {
        data: sample_series(),
        started: started.clone(),
        gate: gate.clone(),
        calls: AtomicUsize::new(0),
    });
    let dashboard = Arc::new(Dashboard::new(provider, test_config()));

    let first_dashboard = dashboard.clone();
    let first = tokio::spawn(async move {
        first_dashboard
            .set_date_range(d(2024, 1, 1), d(2024, 1, 31))
            .await
    });

    // Wait until the first fetch is definitely in flight.
    started.notified().await;

    let committed = dashboard.set_date_range(d(2024, 2, 1), d(2024, 3, 1)).await.unwrap();
    assert!(committed);

    gate.notify_one();
    let stale_committed = first.await.unwrap().unwrap();
    assert!(!stale_committed);

    // The surviving state belongs to the newer request.
    assert_eq!(dashboard.date_range().await, (d(2024, 2, 1), d(2024, 3, 1)));
    assert_eq!(dashboard.metrics().await.days, 2);
}
