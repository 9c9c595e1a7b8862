use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Exchange-rate dashboard CLI")]
pub struct Cli {
    /// Path to the config file (rate_dashboard.toml); falls back to the
    /// RATE_DASHBOARD_CONFIG environment variable, then ./rate_dashboard.toml
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the series and print summary statistics for a date range
    Metrics {
        /// Range start in YYYY-MM-DD format; defaults to the configured start date
        #[arg(long)]
        start: Option<String>,

        /// Range end in YYYY-MM-DD format; defaults to today
        #[arg(long)]
        end: Option<String>,

        /// Initial amount for the adjusted-value projection
        #[arg(long)]
        initial: Option<f64>,
    },

    /// Fetch the series and emit the chart payload for a date range
    Chart {
        /// Range start in YYYY-MM-DD format; defaults to the configured start date
        #[arg(long)]
        start: Option<String>,

        /// Range end in YYYY-MM-DD format; defaults to today
        #[arg(long)]
        end: Option<String>,

        /// Write the payload to this file instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Fetch the full series and write a JSON snapshot
    Fetch {
        /// Snapshot directory (defaults to a subdirectory of the OS temp dir)
        #[arg(short, long)]
        out: Option<String>,
    },
}
