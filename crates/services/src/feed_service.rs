use std::sync::Arc;

use indicator_core::SourceUrl;
use indicator_core::model::Product;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::product_source::{HttpProductSource, ProductSource};

/// Loads the product list for the widget, one request per call.
#[derive(Clone)]
pub struct ProductFeedService {
    source: Arc<dyn ProductSource>,
}

impl ProductFeedService {
    #[must_use]
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// Service backed by `HttpProductSource`.
    #[must_use]
    pub fn http() -> Self {
        Self::new(Arc::new(HttpProductSource::new()))
    }

    /// Fetch the product list, racing the request against `cancel`.
    ///
    /// No retries and no timeout: the request runs until it settles or the
    /// token fires. Dropping the request future aborts it.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Cancelled` if `cancel` fires first (or already has),
    /// otherwise whatever the source reports.
    pub async fn load(
        &self,
        url: &SourceUrl,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, FeedError> {
        if cancel.is_cancelled() {
            return Err(FeedError::Cancelled);
        }

        debug!(%url, "loading product feed");
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(FeedError::Cancelled),
            result = self.source.fetch_products(url) => result,
        };

        match &outcome {
            Ok(products) => info!(%url, count = products.len(), "product feed loaded"),
            Err(FeedError::Cancelled) => debug!(%url, "product feed load cancelled"),
            Err(err) => warn!(%url, error = %err, "product feed failed"),
        }
        outcome
    }
}
