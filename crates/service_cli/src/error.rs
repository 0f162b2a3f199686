//! CLI error type.

use crr_core::types::{ImpliedVolError, PricingError};
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the terminal.
///
/// Wraps the engine's error taxonomy with user-readable context; the
/// numeric crates never format text for display themselves.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameter validation or lattice pricing failed.
    #[error("pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// The implied-volatility solver failed.
    #[error("implied volatility failed: {0}")]
    ImpliedVol(#[from] ImpliedVolError),

    /// A command line argument combination is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Result serialisation failed.
    #[error("could not render output: {0}")]
    Render(#[from] serde_json::Error),
}
