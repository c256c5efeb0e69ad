#![forbid(unsafe_code)]

pub mod error;
pub mod feed_service;
pub mod product_source;

pub use tokio_util::sync::CancellationToken;

pub use error::FeedError;
pub use feed_service::ProductFeedService;
pub use product_source::{HttpProductSource, ProductSource};
