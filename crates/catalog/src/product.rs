//! Product record and patch-update struct.

use wardrobe_core::{BrandId, ProductId};

use crate::category::Category;

/// A product: one brand, one fixed category, one non-negative integer price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub brand_id: BrandId,
    pub category: Category,
    pub price: u64,
}

/// Partial update for a product.
///
/// Each present field is applied independently, and only when it differs
/// from the current value; absent fields leave the record untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub category: Option<Category>,
    pub brand_id: Option<BrandId>,
    pub price: Option<u64>,
}
