use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rate_dashboard::cli::commands::{Cli, Commands};
use rate_dashboard::cli::params::resolve_range;
use rate_dashboard::config;
use rate_dashboard::dashboard::Dashboard;
use rate_ingestor::io::{JsonFileSink, RateSink};
use rate_ingestor::providers::{HttpJsonProvider, RateProvider};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg_path = config::resolve_config_path(cli.config.as_deref());
    let cfg = config::load_config_path(&cfg_path)?;

    let provider = Arc::new(HttpJsonProvider::new(&cfg.feed_url)?);

    match &cli.command {
        Commands::Metrics {
            start,
            end,
            initial,
        } => {
            let (start, end) =
                resolve_range(start.as_deref(), end.as_deref(), cfg.default_start_date)?;
            let dashboard = Dashboard::new(provider, cfg);
            dashboard.set_date_range(start, end).await?;
            print_metrics(&dashboard, *initial).await;
        }

        Commands::Chart { start, end, out } => {
            let (start, end) =
                resolve_range(start.as_deref(), end.as_deref(), cfg.default_start_date)?;
            let dashboard = Dashboard::new(provider, cfg);
            dashboard.set_date_range(start, end).await?;

            let payload = serde_json::to_string_pretty(&dashboard.chart().await)
                .context("failed to serialize chart payload")?;
            match out {
                Some(path) => {
                    std::fs::write(path, payload)
                        .with_context(|| format!("write chart payload to {path}"))?;
                    println!("{path}");
                }
                None => println!("{payload}"),
            }
        }

        Commands::Fetch { out } => {
            let rates = provider.fetch_rates().await?;
            let sink = match out {
                Some(dir) => JsonFileSink::with_base_dir(dir),
                None => JsonFileSink::new(),
            };
            let path = sink.write(&rates).await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

async fn print_metrics(dashboard: &Dashboard, initial: Option<f64>) {
    let (start, end) = dashboard.date_range().await;
    let m = dashboard.metrics().await;

    println!("Range:               {start} .. {end}");
    println!("Days:                {}", m.days);
    println!("Min price:           {:.2}", m.min_price);
    println!("Max price:           {:.2}", m.max_price);
    println!("Median price:        {:.2}", m.median_price);
    println!("Average price:       {:.2}", m.avg_price);
    println!("Std deviation:       {:.2}", m.std_dev);
    println!("Variance:            {:.2}", m.price_variance);
    println!("Price range:         {:.2}", m.price_range);
    println!("Mean low:            {:.2}", m.mean_low);
    println!("Mean high:           {:.2}", m.mean_high);
    println!("Daily changes:       {:.2}", m.daily_changes);
    println!("Monthly changes:     {:.2}", m.monthly_changes);
    println!("Yearly changes:      {:.2}", m.yearly_changes);
    println!("Overall growth:      {:.4}%", m.overall_growth_rate);
    println!("Daily growth:        {:.4}%", m.daily_growth_rate);
    println!("Monthly growth:      {:.4}%", m.monthly_growth_rate);
    println!("Yearly growth:       {:.4}%", m.yearly_growth_rate);
    println!(
        "Adjusted value:      {:.2}",
        dashboard.adjusted_value(initial).await
    );
}
