//! Aggregation result projections.
//!
//! All prices here are raw integer units; display formatting is applied at
//! the response-mapping layer.

use wardrobe_catalog::Category;

/// The cheapest row of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCheapest {
    pub category: Category,
    pub brand: String,
    pub price: u64,
}

/// Cheapest product per category across all brands, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowestPricePerCategory {
    /// Exactly one row per category, ordered by category code.
    pub products: Vec<CategoryCheapest>,
    pub total_price: u64,
}

/// One (category, price) pair of the winning full-coverage brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPrice {
    pub category: Category,
    pub price: u64,
}

/// The brand that covers every category at the lowest combined total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullCoverageBrand {
    pub brand_name: String,
    /// Per-category minimum prices, ordered by category code.
    pub category_prices: Vec<CategoryPrice>,
    pub total_price: u64,
}

/// A brand holding a product at one of a category's extreme prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPrice {
    pub brand: String,
    pub price: u64,
}

/// Lowest- and highest-priced brands of a single category, ties included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPriceRange {
    pub category: Category,
    pub lowest: Vec<BrandPrice>,
    pub highest: Vec<BrandPrice>,
}
