//! The aggregation queries.
//!
//! Pure, read-only computation over committed catalog snapshot rows. Each
//! query is a two-pass algorithm: group rows by key and compute the extreme
//! per group, then materialize the winning (or tied) rows from the original
//! snapshot. Nothing here mutates or caches; every call recomputes from the
//! rows it is given.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use wardrobe_catalog::{CatalogRow, Category};
use wardrobe_core::{BrandId, DomainError, DomainResult};

use crate::result::{
    BrandPrice, CategoryCheapest, CategoryPrice, CategoryPriceRange, FullCoverageBrand,
    LowestPricePerCategory,
};

/// Cheapest product per category across all brands.
///
/// Ties within a category resolve to the lowest product id (first created
/// wins). Every category must be represented: a partial catalog is rejected
/// outright rather than partially reported.
pub fn lowest_price_per_category(rows: &[CatalogRow]) -> DomainResult<LowestPricePerCategory> {
    if rows.is_empty() {
        return Err(DomainError::not_found("no products registered"));
    }

    let mut best: BTreeMap<Category, &CatalogRow> = BTreeMap::new();
    for row in rows {
        match best.entry(row.category) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                let current = slot.get();
                if row.price < current.price
                    || (row.price == current.price && row.product_id < current.product_id)
                {
                    slot.insert(row);
                }
            }
        }
    }

    if best.len() != Category::COUNT {
        return Err(DomainError::not_found(
            "not every category has a registered product",
        ));
    }

    // BTreeMap iteration order is category-code order.
    let products: Vec<CategoryCheapest> = best
        .values()
        .map(|row| CategoryCheapest {
            category: row.category,
            brand: row.brand_name.clone(),
            price: row.price,
        })
        .collect();
    let total_price = products.iter().map(|p| p.price).sum();

    Ok(LowestPricePerCategory {
        products,
        total_price,
    })
}

/// The single brand able to supply every category at the lowest combined
/// total of its per-category minimums.
///
/// Brands missing any category are discarded. Ties on the total resolve to
/// the lowest brand id; the scan runs in ascending brand-id order, so the
/// first strictly-smaller total wins.
pub fn cheapest_full_coverage_brand(rows: &[CatalogRow]) -> DomainResult<FullCoverageBrand> {
    if rows.is_empty() {
        return Err(DomainError::not_found("no products registered"));
    }

    // Pass 1: per (brand, category) minimum price.
    let mut grouped: BTreeMap<BrandId, (&str, BTreeMap<Category, u64>)> = BTreeMap::new();
    for row in rows {
        let (_, prices) = grouped
            .entry(row.brand_id)
            .or_insert_with(|| (row.brand_name.as_str(), BTreeMap::new()));
        prices
            .entry(row.category)
            .and_modify(|price| *price = (*price).min(row.price))
            .or_insert(row.price);
    }

    // Pass 2: keep full-coverage brands, pick the smallest total.
    let mut winner: Option<(u64, &str, &BTreeMap<Category, u64>)> = None;
    for (name, prices) in grouped.values() {
        if prices.len() != Category::COUNT {
            continue;
        }
        let total: u64 = prices.values().sum();
        if winner.is_none_or(|(best_total, _, _)| total < best_total) {
            winner = Some((total, *name, prices));
        }
    }

    let (total_price, brand_name, prices) = winner.ok_or_else(|| {
        DomainError::not_found("no brand covers every category")
    })?;

    Ok(FullCoverageBrand {
        brand_name: brand_name.to_string(),
        category_prices: prices
            .iter()
            .map(|(category, price)| CategoryPrice {
                category: *category,
                price: *price,
            })
            .collect(),
        total_price,
    })
}

/// Lowest- and highest-priced brands of the category named by `title`.
///
/// Ties are not collapsed: every brand holding a product at the extreme
/// price appears once, in snapshot (product-id) order. The lowest list is
/// checked first; an empty category short-circuits before the highest list
/// is computed.
pub fn price_range_by_category(
    rows: &[CatalogRow],
    title: &str,
) -> DomainResult<CategoryPriceRange> {
    let category = Category::from_title(title)?;

    let lowest = brands_at_extreme(rows, category, Extreme::Min);
    if lowest.is_empty() {
        return Err(DomainError::not_found(format!(
            "no products registered in category: {title}"
        )));
    }
    let highest = brands_at_extreme(rows, category, Extreme::Max);

    Ok(CategoryPriceRange {
        category,
        lowest,
        highest,
    })
}

#[derive(Clone, Copy)]
enum Extreme {
    Min,
    Max,
}

/// Every brand owning a product at the category's extreme price, one entry
/// per brand, in snapshot order. Empty when the category has no products.
fn brands_at_extreme(rows: &[CatalogRow], category: Category, extreme: Extreme) -> Vec<BrandPrice> {
    let in_category = rows.iter().filter(|r| r.category == category);
    let target = match extreme {
        Extreme::Min => in_category.clone().map(|r| r.price).min(),
        Extreme::Max => in_category.clone().map(|r| r.price).max(),
    };
    let Some(target) = target else {
        return Vec::new();
    };

    let mut seen: BTreeSet<BrandId> = BTreeSet::new();
    rows.iter()
        .filter(|r| r.category == category && r.price == target && seen.insert(r.brand_id))
        .map(|r| BrandPrice {
            brand: r.brand_name.clone(),
            price: r.price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wardrobe_catalog::seed::{seed_reference_catalog, REFERENCE_PRICES};
    use wardrobe_catalog::{CatalogStore, InMemoryCatalogStore};
    use wardrobe_core::ProductId;

    fn seeded_rows() -> Vec<CatalogRow> {
        let store = InMemoryCatalogStore::new();
        seed_reference_catalog(&store).unwrap();
        store.snapshot()
    }

    fn row(product_id: u64, brand_id: u64, brand: &str, category: Category, price: u64) -> CatalogRow {
        CatalogRow {
            product_id: ProductId::new(product_id),
            brand_id: BrandId::new(brand_id),
            brand_name: brand.to_string(),
            category,
            price,
        }
    }

    mod lowest_per_category {
        use super::*;

        #[test]
        fn picks_the_minimum_of_every_category() {
            let result = lowest_price_per_category(&seeded_rows()).unwrap();

            assert_eq!(result.products.len(), 8);
            assert_eq!(result.total_price, 34100);

            let prices: Vec<u64> = result.products.iter().map(|p| p.price).collect();
            assert_eq!(prices, vec![10000, 5000, 3000, 9000, 2000, 1500, 1700, 1900]);

            // Sneakers tie (A and G at 9,000) resolves to the first-created
            // product, brand A.
            let brands: Vec<&str> = result.products.iter().map(|p| p.brand.as_str()).collect();
            assert_eq!(brands, vec!["C", "E", "D", "A", "A", "D", "I", "F"]);

            let titles: Vec<&str> = result
                .products
                .iter()
                .map(|p| p.category.title())
                .collect();
            assert_eq!(
                titles,
                vec!["상의", "아우터", "바지", "스니커즈", "가방", "모자", "양말", "액세서리"]
            );
        }

        #[test]
        fn a_cheaper_product_takes_the_category_over() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            let e = store.brand_by_name("E").unwrap();
            store.insert_product(e.id, Category::Outer, 4000).unwrap();
            store.insert_product(e.id, Category::Outer, 3000).unwrap();

            let result = lowest_price_per_category(&store.snapshot()).unwrap();
            assert_eq!(result.total_price, 32100);
            assert_eq!(result.products[1].brand, "E");
            assert_eq!(result.products[1].price, 3000);
        }

        #[test]
        fn deleting_the_minimum_promotes_the_next_lowest() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            // Product 17 is brand C's 상의 at 10,000, the category minimum.
            store.remove_product(ProductId::new(17)).unwrap();

            let result = lowest_price_per_category(&store.snapshot()).unwrap();
            assert_eq!(result.total_price, 34200);
            assert_eq!(result.products[0].brand, "D");
            assert_eq!(result.products[0].price, 10100);
        }

        #[test]
        fn empty_catalog_is_rejected() {
            let err = lowest_price_per_category(&[]).unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }

        #[test]
        fn one_empty_category_rejects_the_whole_result() {
            let rows: Vec<CatalogRow> = seeded_rows()
                .into_iter()
                .filter(|r| r.category != Category::Top)
                .collect();

            let err = lowest_price_per_category(&rows).unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }

        #[test]
        fn tie_resolves_to_the_lowest_product_id() {
            let rows = vec![
                row(1, 1, "A", Category::Top, 500),
                row(2, 2, "B", Category::Top, 500),
            ];
            // Only one category populated, so coverage fails; check the pick
            // through a fully-populated minimal catalog instead.
            let mut full: Vec<CatalogRow> = Category::ALL
                .into_iter()
                .enumerate()
                .map(|(i, c)| row(10 + i as u64, 3, "Z", c, 9999))
                .collect();
            full.extend(rows);

            let result = lowest_price_per_category(&full).unwrap();
            assert_eq!(result.products[0].brand, "A");
            assert_eq!(result.products[0].price, 500);
        }

        proptest! {
            /// Each reported price is the true minimum of its category.
            #[test]
            fn reported_prices_are_true_minimums(
                extra in proptest::collection::vec((0u64..8, 1u64..20_000), 0..40)
            ) {
                let store = InMemoryCatalogStore::new();
                seed_reference_catalog(&store).unwrap();
                let brand = store.insert_brand("X").unwrap();
                for (cat_idx, price) in extra {
                    let category = Category::ALL[cat_idx as usize];
                    store.insert_product(brand.id, category, price).unwrap();
                }

                let rows = store.snapshot();
                let result = lowest_price_per_category(&rows).unwrap();
                prop_assert_eq!(result.products.len(), 8);
                for cheapest in &result.products {
                    let true_min = rows
                        .iter()
                        .filter(|r| r.category == cheapest.category)
                        .map(|r| r.price)
                        .min()
                        .unwrap();
                    prop_assert_eq!(cheapest.price, true_min);
                }
                let total: u64 = result.products.iter().map(|p| p.price).sum();
                prop_assert_eq!(result.total_price, total);
            }
        }
    }

    mod full_coverage_brand {
        use super::*;

        #[test]
        fn brand_d_wins_the_reference_catalog() {
            let result = cheapest_full_coverage_brand(&seeded_rows()).unwrap();

            assert_eq!(result.brand_name, "D");
            assert_eq!(result.total_price, 36100);
            assert_eq!(result.category_prices.len(), 8);

            let expected = [
                ("상의", 10100),
                ("아우터", 5100),
                ("바지", 3000),
                ("스니커즈", 9500),
                ("가방", 2500),
                ("모자", 1500),
                ("양말", 2400),
                ("액세서리", 2000),
            ];
            for (entry, (title, price)) in result.category_prices.iter().zip(expected) {
                assert_eq!(entry.category.title(), title);
                assert_eq!(entry.price, price);
            }
        }

        #[test]
        fn losing_coverage_hands_the_win_to_the_runner_up() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            // Product 25 is brand D's only 상의 product; without it D no
            // longer covers every category.
            store.remove_product(ProductId::new(25)).unwrap();

            let result = cheapest_full_coverage_brand(&store.snapshot()).unwrap();
            assert_eq!(result.brand_name, "C");
            assert_eq!(result.total_price, 37100);
            assert_eq!(result.category_prices.len(), 8);
        }

        #[test]
        fn deleting_another_brands_product_does_not_change_the_winner() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            // Product 17 is brand C's 상의; D keeps the smallest total.
            store.remove_product(ProductId::new(17)).unwrap();

            let result = cheapest_full_coverage_brand(&store.snapshot()).unwrap();
            assert_eq!(result.brand_name, "D");
            assert_eq!(result.total_price, 36100);
        }

        #[test]
        fn per_brand_category_minimum_is_used_for_the_total() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            // A second, cheaper D 모자 lowers D's total further.
            let d = store.brand_by_name("D").unwrap();
            store.insert_product(d.id, Category::Hat, 1000).unwrap();

            let result = cheapest_full_coverage_brand(&store.snapshot()).unwrap();
            assert_eq!(result.brand_name, "D");
            assert_eq!(result.total_price, 35600);
        }

        #[test]
        fn partial_brands_are_never_candidates() {
            // One brand covers 7 categories very cheaply; another covers all
            // 8 expensively. Only the full-coverage brand qualifies.
            let mut rows: Vec<CatalogRow> = Category::ALL
                .into_iter()
                .enumerate()
                .map(|(i, c)| row(i as u64 + 1, 1, "Full", c, 10_000))
                .collect();
            rows.extend(
                Category::ALL
                    .into_iter()
                    .take(7)
                    .enumerate()
                    .map(|(i, c)| row(100 + i as u64, 2, "Partial", c, 1)),
            );

            let result = cheapest_full_coverage_brand(&rows).unwrap();
            assert_eq!(result.brand_name, "Full");
            assert_eq!(result.total_price, 80_000);
        }

        #[test]
        fn total_tie_resolves_to_the_lowest_brand_id() {
            let mut rows = Vec::new();
            for (i, c) in Category::ALL.into_iter().enumerate() {
                rows.push(row(i as u64 + 1, 2, "Second", c, 100));
                rows.push(row(i as u64 + 101, 1, "First", c, 100));
            }

            let result = cheapest_full_coverage_brand(&rows).unwrap();
            assert_eq!(result.brand_name, "First");
            assert_eq!(result.total_price, 800);
        }

        #[test]
        fn empty_catalog_is_rejected() {
            let err = cheapest_full_coverage_brand(&[]).unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }

        #[test]
        fn no_full_coverage_brand_is_rejected() {
            let rows = vec![
                row(1, 1, "A", Category::Top, 100),
                row(2, 2, "B", Category::Hat, 100),
            ];
            let err = cheapest_full_coverage_brand(&rows).unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }
    }

    mod price_range {
        use super::*;

        #[test]
        fn reports_both_extremes_of_the_reference_catalog() {
            let result = price_range_by_category(&seeded_rows(), "상의").unwrap();

            assert_eq!(result.category.title(), "상의");
            assert_eq!(result.lowest.len(), 1);
            assert_eq!(result.lowest[0].brand, "C");
            assert_eq!(result.lowest[0].price, 10000);
            assert_eq!(result.highest.len(), 1);
            assert_eq!(result.highest[0].brand, "I");
            assert_eq!(result.highest[0].price, 11400);
        }

        #[test]
        fn includes_every_tied_brand() {
            let result = price_range_by_category(&seeded_rows(), "스니커즈").unwrap();

            // A and G tie at 9,000 for the minimum; E holds 9,900 alone.
            let lowest: Vec<&str> = result.lowest.iter().map(|b| b.brand.as_str()).collect();
            assert_eq!(lowest, vec!["A", "G"]);
            assert!(result.lowest.iter().all(|b| b.price == 9000));

            let highest: Vec<&str> = result.highest.iter().map(|b| b.brand.as_str()).collect();
            assert_eq!(highest, vec!["E"]);
            assert_eq!(result.highest[0].price, 9900);
        }

        #[test]
        fn a_brand_with_duplicate_extreme_products_appears_once() {
            let store = InMemoryCatalogStore::new();
            seed_reference_catalog(&store).unwrap();
            let c = store.brand_by_name("C").unwrap();
            store.insert_product(c.id, Category::Top, 10000).unwrap();

            let result = price_range_by_category(&store.snapshot(), "상의").unwrap();
            let lowest: Vec<&str> = result.lowest.iter().map(|b| b.brand.as_str()).collect();
            assert_eq!(lowest, vec!["C"]);
        }

        #[test]
        fn unknown_title_is_not_found() {
            let err = price_range_by_category(&seeded_rows(), "Non-Exists").unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }

        #[test]
        fn empty_category_is_not_found() {
            let rows: Vec<CatalogRow> = seeded_rows()
                .into_iter()
                .filter(|r| r.category != Category::Top)
                .collect();

            let err = price_range_by_category(&rows, "상의").unwrap_err();
            assert!(matches!(err, DomainError::NotFound(_)));
        }

        #[test]
        fn single_product_category_reports_the_same_row_twice() {
            let rows = vec![row(1, 1, "A", Category::Bag, 700)];
            let result = price_range_by_category(&rows, "가방").unwrap();
            assert_eq!(result.lowest, result.highest);
            assert_eq!(result.lowest[0].price, 700);
        }
    }

    #[test]
    fn reference_table_matches_the_seeded_snapshot() {
        let rows = seeded_rows();
        for (brand_idx, (name, prices)) in REFERENCE_PRICES.iter().enumerate() {
            for (cat_idx, price) in prices.iter().enumerate() {
                let product_id = ProductId::new((brand_idx * 8 + cat_idx) as u64 + 1);
                let row = rows.iter().find(|r| r.product_id == product_id).unwrap();
                assert_eq!(row.brand_name, *name);
                assert_eq!(row.price, *price);
                assert_eq!(row.category, Category::ALL[cat_idx]);
            }
        }
    }
}
