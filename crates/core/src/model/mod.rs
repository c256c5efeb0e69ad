mod product;
mod scroll;

pub use product::{Product, ProductPage};
pub use scroll::{ScrollMetrics, ScrollPercentage};
