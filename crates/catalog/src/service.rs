//! Catalog Management: CRUD orchestration over the store.
//!
//! Shape validation happens here, before any store call (fail fast, no
//! partial writes); uniqueness and reference checks happen inside the store,
//! under its write lock. The aggregation engine never goes through this
//! layer; it reads store snapshots directly.

use std::sync::Arc;

use wardrobe_core::{BrandId, DomainResult, ProductId};

use crate::brand::{validate_brand_name, Brand};
use crate::category::Category;
use crate::product::{Product, ProductPatch};
use crate::store::CatalogStore;

/// Fields accepted by a product update request; category arrives as a wire
/// code and is resolved here.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub category: Option<String>,
    pub brand_id: Option<BrandId>,
    pub price: Option<u64>,
}

#[derive(Debug)]
pub struct CatalogService<S> {
    store: Arc<S>,
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn add_brand(&self, name: &str) -> DomainResult<Brand> {
        validate_brand_name(name)?;
        let brand = self.store.insert_brand(name)?;
        tracing::debug!(brand_id = brand.id.value(), name = %brand.name, "brand created");
        Ok(brand)
    }

    pub fn update_brand(&self, id: BrandId, name: &str) -> DomainResult<Brand> {
        validate_brand_name(name)?;
        let brand = self.store.rename_brand(id, name)?;
        tracing::debug!(brand_id = brand.id.value(), name = %brand.name, "brand renamed");
        Ok(brand)
    }

    /// Delete a brand; its products are cascaded away in the same commit.
    pub fn delete_brand(&self, id: BrandId) -> DomainResult<Brand> {
        let (brand, cascaded) = self.store.remove_brand(id)?;
        tracing::debug!(
            brand_id = brand.id.value(),
            cascaded = cascaded.len(),
            "brand deleted"
        );
        Ok(brand)
    }

    pub fn add_product(
        &self,
        category_code: &str,
        brand_id: BrandId,
        price: u64,
    ) -> DomainResult<Product> {
        let category = Category::from_code(category_code)?;
        let product = self.store.insert_product(brand_id, category, price)?;
        tracing::debug!(product_id = product.id.value(), "product created");
        Ok(product)
    }

    pub fn update_product(&self, id: ProductId, update: ProductUpdate) -> DomainResult<Product> {
        let patch = ProductPatch {
            category: update
                .category
                .as_deref()
                .map(Category::from_code)
                .transpose()?,
            brand_id: update.brand_id,
            price: update.price,
        };
        let product = self.store.update_product(id, patch)?;
        tracing::debug!(product_id = product.id.value(), "product updated");
        Ok(product)
    }

    pub fn delete_product(&self, id: ProductId) -> DomainResult<Product> {
        let product = self.store.remove_product(id)?;
        tracing::debug!(product_id = product.id.value(), "product deleted");
        Ok(product)
    }

    /// Resolve a product's brand for response mapping.
    pub fn brand_of(&self, product: &Product) -> Option<Brand> {
        self.store.brand(product.brand_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCatalogStore;
    use wardrobe_core::DomainError;

    fn service() -> CatalogService<InMemoryCatalogStore> {
        CatalogService::new(Arc::new(InMemoryCatalogStore::new()))
    }

    #[test]
    fn add_brand_rejects_blank_names_before_touching_the_store() {
        let svc = service();
        let err = svc.add_brand("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.store().snapshot().is_empty());
    }

    #[test]
    fn update_brand_checks_blank_name_before_existence() {
        let svc = service();
        // Unknown id, blank name: the blank name wins.
        let err = svc.update_brand(BrandId::new(99), "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn add_product_resolves_the_category_code() {
        let svc = service();
        let brand = svc.add_brand("A").unwrap();

        let product = svc.add_product("TOP", brand.id, 1000).unwrap();
        assert_eq!(product.category, Category::Top);

        let err = svc.add_product("COAT", brand.id, 1000).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn update_product_parses_category_and_keeps_absent_fields() {
        let svc = service();
        let brand = svc.add_brand("A").unwrap();
        let product = svc.add_product("TOP", brand.id, 9000).unwrap();

        let updated = svc
            .update_product(
                product.id,
                ProductUpdate {
                    category: Some("HAT".to_string()),
                    ..ProductUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.category, Category::Hat);
        assert_eq!(updated.price, 9000);
        assert_eq!(updated.brand_id, brand.id);
    }

    #[test]
    fn update_unknown_product_is_not_found() {
        let svc = service();
        let err = svc
            .update_product(
                ProductId::new(404),
                ProductUpdate {
                    price: Some(100),
                    ..ProductUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn delete_brand_returns_the_deleted_record() {
        let svc = service();
        let brand = svc.add_brand("A").unwrap();
        svc.add_product("TOP", brand.id, 1000).unwrap();

        let deleted = svc.delete_brand(brand.id).unwrap();
        assert_eq!(deleted.name, "A");
        assert!(svc.store().snapshot().is_empty());
    }
}
