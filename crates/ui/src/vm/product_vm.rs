use indicator_core::model::Product;

/// One rendered line of the product list, keyed by its position in the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRowVm {
    pub key: usize,
    pub title: String,
}

#[must_use]
pub fn map_product_rows(products: &[Product]) -> Vec<ProductRowVm> {
    products
        .iter()
        .enumerate()
        .map(|(key, product)| ProductRowVm {
            key,
            title: product.title.clone(),
        })
        .collect()
}
