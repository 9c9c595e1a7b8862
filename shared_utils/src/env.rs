//! Environment lookup helpers shared across the workspace.
//!
//! Callers at the CLI edge use these instead of raw `std::env::var` so that a
//! missing variable surfaces as a structured error (or a clean `None` for
//! overrides such as the config-path variable).

use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads a required environment variable.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn required_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an optional environment variable.
///
/// Unset and empty values both read as `None`, so an exported-but-blank
/// override behaves the same as no override at all.
pub fn optional_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
