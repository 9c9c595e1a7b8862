//! Provider abstraction for exchange-rate feeds.
//!
//! This module defines the [`RateProvider`] trait, a unified interface for
//! fetching the daily rate series from any feed (the bundled static JSON
//! document, or a different mirror of it).
//!
//! Concrete implementations (such as [`HttpJsonProvider`]) handle
//! transport-specific logic; callers only see the canonical
//! [`DailyRate`](crate::models::DailyRate) records, newest first.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn RateProvider`) for runtime selection of feeds.

pub mod errors;
pub mod http_json;

use async_trait::async_trait;

use crate::models::DailyRate;
pub use errors::{ProviderError, ProviderInitError};
pub use http_json::HttpJsonProvider;

#[async_trait]
pub trait RateProvider {
    /// Fetches the full daily-rate series, ordered descending by date.
    ///
    /// Every invocation re-fetches; providers do not cache across calls.
    async fn fetch_rates(&self) -> Result<Vec<DailyRate>, ProviderError>;
}
