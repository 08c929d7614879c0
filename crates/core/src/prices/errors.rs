//! Price-related error types.

use thiserror::Error;

/// Errors raised by the price store, its source and the refresh job.
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Symbol not found: {0}")]
    NotFound(String),

    #[error("Price source unreadable: {0}")]
    SourceUnreadable(String),

    #[error("Price source is malformed: {0}")]
    MalformedSource(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Price refresh failed: {0}")]
    RefreshFailed(String),
}

impl PriceError {
    /// Returns true if the error came from reading the source rather than from its content.
    pub fn is_io(&self) -> bool {
        matches!(self, PriceError::SourceUnreadable(_))
    }
}
