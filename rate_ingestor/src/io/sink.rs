use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::DailyRate;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// An error occurred while trying to write the snapshot (e.g., file I/O error).
    #[snafu(display("Failed to write snapshot: {message}"))]
    WriteError {
        message: String,
        backtrace: Backtrace,
    },

    /// An error occurred while converting the canonical records into the destination format.
    #[snafu(display("Snapshot conversion error: {message}"))]
    ConversionError {
        message: String,
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait RateSink {
    /// The type of output returned after a successful write operation.
    ///
    /// This makes the trait flexible. For example:
    /// - A file sink might return `PathBuf`, the path to the created file.
    /// - A forwarding sink might return `usize`, the number of records sent.
    type Output;

    /// Writes a rate series snapshot to the destination.
    ///
    /// # Arguments
    /// * `rates` - The records to write, in feed order (newest first).
    async fn write(&self, rates: &[DailyRate]) -> Result<Self::Output, SinkError>;
}
