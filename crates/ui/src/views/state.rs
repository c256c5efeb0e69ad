use indicator_core::model::Product;

use crate::vm::{ProductRowVm, map_product_rows};

/// Shown when a failure carries no description of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load products.";

/// Local state of the product feed: the list, the loading flag, the error.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    rows: Vec<ProductRowVm>,
    loading: bool,
    error: Option<String>,
}

/// What the widget renders, decided from `FeedState`.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedView {
    Loading,
    Error(String),
    Ready(Vec<ProductRowVm>),
}

impl FeedState {
    /// State at mount time: the fetch starts immediately, so it is loading.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            rows: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Replace the list wholesale and leave the loading state.
    pub fn succeed(&mut self, products: &[Product]) {
        self.rows = map_product_rows(products);
        self.loading = false;
    }

    /// Record a failure. Clears the loading flag so the error becomes visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        self.error = Some(message);
        self.loading = false;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> &[ProductRowVm] {
        &self.rows
    }

    /// Loading wins over an error, and an error hides the list.
    #[must_use]
    pub fn view(&self) -> FeedView {
        if self.loading {
            return FeedView::Loading;
        }
        match &self.error {
            Some(message) => FeedView::Error(message.clone()),
            None => FeedView::Ready(self.rows.clone()),
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::loading()
    }
}
