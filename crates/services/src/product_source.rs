use async_trait::async_trait;
use indicator_core::SourceUrl;
use indicator_core::model::{Product, ProductPage};
use reqwest::Client;

use crate::error::FeedError;

/// Where product lists come from.
///
/// Futures are not required to be `Send`: in the browser the HTTP client runs
/// on the single JS event loop.
#[async_trait(?Send)]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product list behind `url`.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Network` if the request fails and
    /// `FeedError::Decode` if the body is not a product page.
    async fn fetch_products(&self, url: &SourceUrl) -> Result<Vec<Product>, FeedError>;
}

/// `ProductSource` backed by a plain, unauthenticated HTTP GET.
#[derive(Clone, Debug, Default)]
pub struct HttpProductSource {
    client: Client,
}

impl HttpProductSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self, url: &SourceUrl) -> Result<Vec<Product>, FeedError> {
        let response = self.client.get(url.as_url().clone()).send().await?;

        // Status is not checked; whatever body comes back is decoded.
        let body = response.text().await?;
        decode_products(&body)
    }
}

/// Decode a response body into its product list.
///
/// # Errors
///
/// Returns `FeedError::Decode` if `body` is not valid JSON or does not match
/// the `{ products: [...] }` shape.
pub fn decode_products(body: &str) -> Result<Vec<Product>, FeedError> {
    let page: ProductPage = serde_json::from_str(body)?;
    Ok(page.into_products())
}
