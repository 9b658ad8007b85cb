//! `wardrobe-engine` — the catalog aggregation engine.
//!
//! Read-only queries over catalog snapshot rows: the cheapest product per
//! category, the cheapest brand covering every category, and a single
//! category's price range. The engine holds no state and performs no I/O;
//! callers hand it the rows from `CatalogStore::snapshot()` and every call
//! recomputes from scratch, so mutations are visible on the next query.

pub mod queries;
pub mod result;

pub use queries::{cheapest_full_coverage_brand, lowest_price_per_category, price_range_by_category};
pub use result::{
    BrandPrice, CategoryCheapest, CategoryPrice, CategoryPriceRange, FullCoverageBrand,
    LowestPricePerCategory,
};
