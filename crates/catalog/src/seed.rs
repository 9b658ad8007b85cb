//! Reference catalog fixture: nine brands, one product per category each.
//!
//! Used by the demo seed at startup and by tests exercising the aggregation
//! queries. Products are inserted brand-major in category-code order, so the
//! allocated ids are predictable (brand "A" gets products 1..=8, "B" gets
//! 9..=16, and so on).

use wardrobe_core::DomainResult;

use crate::category::Category;
use crate::store::CatalogStore;

/// Prices per brand, one entry per category in `Category::ALL` order.
pub const REFERENCE_PRICES: [(&str, [u64; Category::COUNT]); 9] = [
    ("A", [11200, 5500, 4200, 9000, 2000, 1700, 1800, 2300]),
    ("B", [10500, 5900, 3800, 9100, 2100, 2000, 2000, 2200]),
    ("C", [10000, 6200, 3300, 9200, 2200, 1900, 2200, 2100]),
    ("D", [10100, 5100, 3000, 9500, 2500, 1500, 2400, 2000]),
    ("E", [10700, 5000, 3800, 9900, 2300, 1800, 2100, 2100]),
    ("F", [11200, 7200, 4000, 9300, 2100, 1600, 2300, 1900]),
    ("G", [10500, 5800, 3900, 9000, 2200, 1700, 2100, 2000]),
    ("H", [10800, 6300, 3100, 9700, 2100, 1600, 2000, 2000]),
    ("I", [11400, 6700, 3200, 9500, 2400, 1700, 1700, 2400]),
];

/// Populate `store` with the reference catalog.
pub fn seed_reference_catalog<S: CatalogStore>(store: &S) -> DomainResult<()> {
    for (name, prices) in REFERENCE_PRICES {
        let brand = store.insert_brand(name)?;
        for (category, price) in Category::ALL.into_iter().zip(prices) {
            store.insert_product(brand.id, category, price)?;
        }
    }
    Ok(())
}
