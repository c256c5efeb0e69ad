use std::sync::Arc;

use indicator_core::{AppConfig, SourceUrl};
use services::ProductFeedService;

pub trait UiApp: Send + Sync {
    fn config(&self) -> &AppConfig;

    fn product_feed(&self) -> Arc<ProductFeedService>;
}

#[derive(Clone)]
pub struct AppContext {
    source_url: SourceUrl,
    product_feed: Arc<ProductFeedService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            source_url: app.config().source_url().clone(),
            product_feed: app.product_feed(),
        }
    }

    /// The catalog endpoint the root widget is mounted with.
    #[must_use]
    pub fn source_url(&self) -> SourceUrl {
        self.source_url.clone()
    }

    #[must_use]
    pub fn product_feed(&self) -> Arc<ProductFeedService> {
        Arc::clone(&self.product_feed)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
