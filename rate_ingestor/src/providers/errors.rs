use thiserror::Error;

/// Errors that can occur within a [`RateProvider`](super::RateProvider)
/// implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during the feed request (e.g., network failure, bad JSON).
    #[error("Feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed answered with a non-success status; the payload text is
    /// carried verbatim.
    #[error("Feed error: {0}")]
    Api(String),
}

/// Errors that can occur while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
