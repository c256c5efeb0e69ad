mod product_vm;

pub use product_vm::{ProductRowVm, map_product_rows};
