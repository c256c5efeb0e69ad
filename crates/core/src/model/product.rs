use serde::{Deserialize, Serialize};

//
// ─── PRODUCT ───────────────────────────────────────────────────────────────────
//

/// One catalog entry. Only `title` is shown; the other fields are kept so the
/// payload round-trips without loss of the parts we understand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Product {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

//
// ─── RESPONSE PAGE ─────────────────────────────────────────────────────────────
//

/// Body of a catalog response: `{ products: [...], total, skip, limit }`.
///
/// A body without `products` decodes to an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl ProductPage {
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
