//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while loading the product feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("response body is not a product list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("product feed request was cancelled")]
    Cancelled,
}

impl FeedError {
    /// True for the error produced by tearing the widget down mid-request.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FeedError::Cancelled)
    }
}
