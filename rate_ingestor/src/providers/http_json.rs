use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    models::DailyRate,
    providers::{ProviderError, ProviderInitError, RateProvider},
};

/// Fetches the rate series from a JSON document over HTTP.
///
/// The feed is a single static resource: one `GET`, no pagination, no retry,
/// no caching across calls. Transport failures propagate uninterpreted.
pub struct HttpJsonProvider {
    client: Client,
    url: String,
}

impl HttpJsonProvider {
    /// Creates a provider for the given feed URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The feed URL this provider reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RateProvider for HttpJsonProvider {
    async fn fetch_rates(&self) -> Result<Vec<DailyRate>, ProviderError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown feed error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        // The feed speaks the canonical record shape directly, so no
        // vendor-specific wire struct is needed.
        let rates = response.json::<Vec<DailyRate>>().await?;
        debug!(records = rates.len(), url = %self.url, "fetched rate series");

        Ok(rates)
    }
}
