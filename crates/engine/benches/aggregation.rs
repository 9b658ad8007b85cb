use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use wardrobe_catalog::seed::seed_reference_catalog;
use wardrobe_catalog::{CatalogRow, CatalogStore, Category, InMemoryCatalogStore};
use wardrobe_engine::{
    cheapest_full_coverage_brand, lowest_price_per_category, price_range_by_category,
};

/// Reference catalog plus `extra_brands` synthetic full-coverage brands.
fn catalog_rows(extra_brands: u64) -> Vec<CatalogRow> {
    let store = InMemoryCatalogStore::new();
    seed_reference_catalog(&store).unwrap();

    for i in 0..extra_brands {
        let brand = store.insert_brand(&format!("X{i}")).unwrap();
        for (j, category) in Category::ALL.into_iter().enumerate() {
            // Spread prices so extrema and totals differ per brand.
            let price = 1_000 + (i * 37 + j as u64 * 113) % 9_000;
            store.insert_product(brand.id, category, price).unwrap();
        }
    }

    store.snapshot()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for extra_brands in [0u64, 100, 1_000] {
        let rows = catalog_rows(extra_brands);
        group.throughput(Throughput::Elements(rows.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("lowest_price_per_category", rows.len()),
            &rows,
            |b, rows| b.iter(|| lowest_price_per_category(black_box(rows)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("cheapest_full_coverage_brand", rows.len()),
            &rows,
            |b, rows| b.iter(|| cheapest_full_coverage_brand(black_box(rows)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("price_range_by_category", rows.len()),
            &rows,
            |b, rows| b.iter(|| price_range_by_category(black_box(rows), "상의").unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
