//! Catalog error types.

use thiserror::Error;

/// Errors raised by catalog domain helpers.
///
/// Card rendering itself has no failure modes; only feed parsing and
/// money arithmetic can fail.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency code not recognized.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Money arithmetic across different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Release date string could not be parsed.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),
}
