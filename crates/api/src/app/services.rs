use std::sync::Arc;

use wardrobe_catalog::seed::seed_reference_catalog;
use wardrobe_catalog::{CatalogRow, CatalogService, CatalogStore, InMemoryCatalogStore};
use wardrobe_core::DomainResult;
use wardrobe_engine::{CategoryPriceRange, FullCoverageBrand, LowestPricePerCategory};

/// Service container shared across handlers.
///
/// Mutations go through the catalog service; aggregation reads take a fresh
/// store snapshot per call and hand it to the engine, so every query sees
/// the latest committed catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: CatalogService<InMemoryCatalogStore>,
}

impl AppServices {
    pub fn catalog(&self) -> &CatalogService<InMemoryCatalogStore> {
        &self.catalog
    }

    fn snapshot(&self) -> Vec<CatalogRow> {
        self.catalog.store().snapshot()
    }

    pub fn lowest_price_per_category(&self) -> DomainResult<LowestPricePerCategory> {
        wardrobe_engine::lowest_price_per_category(&self.snapshot())
    }

    pub fn cheapest_full_coverage_brand(&self) -> DomainResult<FullCoverageBrand> {
        wardrobe_engine::cheapest_full_coverage_brand(&self.snapshot())
    }

    pub fn price_range_by_category(&self, title: &str) -> DomainResult<CategoryPriceRange> {
        wardrobe_engine::price_range_by_category(&self.snapshot(), title)
    }
}

pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryCatalogStore::new());

    let seed = std::env::var("SEED_DEMO_CATALOG")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);
    if seed {
        match seed_reference_catalog(store.as_ref()) {
            Ok(()) => tracing::info!("seeded demo catalog"),
            Err(e) => tracing::warn!("failed to seed demo catalog: {e}"),
        }
    }

    AppServices {
        catalog: CatalogService::new(store),
    }
}
