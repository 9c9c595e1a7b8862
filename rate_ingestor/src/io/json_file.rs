use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use snafu::ResultExt;
use tracing::debug;
use uuid::Uuid;

use crate::io::sink::{ConversionSnafu, IoSnafu, RateSink, SinkError};
use crate::models::DailyRate;

/// Writes rate series snapshots as JSON files.
///
/// Snapshots land under a per-application subdirectory of the OS temp dir
/// (or an explicit base directory), one file per write, so a charting
/// surface can pick the latest one up without coordinating with the fetcher.
pub struct JsonFileSink {
    base_dir: Option<PathBuf>,
}

impl JsonFileSink {
    /// A sink writing under `<temp dir>/rate_ingestor/`.
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// A sink writing under the given directory instead of the temp dir.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn target_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.clone(),
            None => {
                let mut base = env::temp_dir();
                base.push("rate_ingestor");
                base
            }
        }
    }
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSink for JsonFileSink {
    type Output = PathBuf;

    async fn write(&self, rates: &[DailyRate]) -> Result<PathBuf, SinkError> {
        let dir = self.target_dir();
        tokio::fs::create_dir_all(&dir).await.context(IoSnafu)?;

        // Timestamp plus a UUID keeps concurrent writers from clobbering
        // each other's snapshots.
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let filename = format!("rates_{}_{}.json", timestamp, Uuid::new_v4());
        let path = dir.join(filename);

        let payload = serde_json::to_vec_pretty(rates)
            .map_err(|e| {
                ConversionSnafu {
                    message: e.to_string(),
                }
                .build()
            })?;
        tokio::fs::write(&path, payload).await.context(IoSnafu)?;
        debug!(path = %path.display(), records = rates.len(), "wrote snapshot");

        Ok(path)
    }
}
