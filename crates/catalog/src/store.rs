//! Catalog storage abstraction and its in-memory implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use wardrobe_core::{BrandId, DomainError, DomainResult, ProductId};

use crate::brand::Brand;
use crate::category::Category;
use crate::product::{Product, ProductPatch};

/// One joined snapshot row: a product together with its brand's name.
///
/// This is the only shape the aggregation engine reads. Rows are produced in
/// product-id order, which makes tie materialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub product_id: ProductId,
    pub brand_id: BrandId,
    pub brand_name: String,
    pub category: Category,
    pub price: u64,
}

/// Durable record storage for brands and products.
///
/// Every mutation is atomic: it fully applies or fully rejects, and readers
/// observe only committed states. Reference/uniqueness checks live here so
/// that check and write happen under one lock.
pub trait CatalogStore: Send + Sync {
    fn insert_brand(&self, name: &str) -> DomainResult<Brand>;
    fn rename_brand(&self, id: BrandId, name: &str) -> DomainResult<Brand>;
    /// Removes the brand's products, then the brand, as one operation.
    /// Returns the deleted brand together with its cascaded products.
    fn remove_brand(&self, id: BrandId) -> DomainResult<(Brand, Vec<Product>)>;
    fn brand(&self, id: BrandId) -> Option<Brand>;
    fn brand_by_name(&self, name: &str) -> Option<Brand>;

    fn insert_product(
        &self,
        brand_id: BrandId,
        category: Category,
        price: u64,
    ) -> DomainResult<Product>;
    fn update_product(&self, id: ProductId, patch: ProductPatch) -> DomainResult<Product>;
    fn remove_product(&self, id: ProductId) -> DomainResult<Product>;
    fn product(&self, id: ProductId) -> Option<Product>;

    /// Current committed catalog, joined with brand names, in id order.
    fn snapshot(&self) -> Vec<CatalogRow>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn insert_brand(&self, name: &str) -> DomainResult<Brand> {
        (**self).insert_brand(name)
    }

    fn rename_brand(&self, id: BrandId, name: &str) -> DomainResult<Brand> {
        (**self).rename_brand(id, name)
    }

    fn remove_brand(&self, id: BrandId) -> DomainResult<(Brand, Vec<Product>)> {
        (**self).remove_brand(id)
    }

    fn brand(&self, id: BrandId) -> Option<Brand> {
        (**self).brand(id)
    }

    fn brand_by_name(&self, name: &str) -> Option<Brand> {
        (**self).brand_by_name(name)
    }

    fn insert_product(
        &self,
        brand_id: BrandId,
        category: Category,
        price: u64,
    ) -> DomainResult<Product> {
        (**self).insert_product(brand_id, category, price)
    }

    fn update_product(&self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        (**self).update_product(id, patch)
    }

    fn remove_product(&self, id: ProductId) -> DomainResult<Product> {
        (**self).remove_product(id)
    }

    fn product(&self, id: ProductId) -> Option<Product> {
        (**self).product(id)
    }

    fn snapshot(&self) -> Vec<CatalogRow> {
        (**self).snapshot()
    }
}

#[derive(Debug, Default)]
struct Inner {
    brands: BTreeMap<BrandId, Brand>,
    products: BTreeMap<ProductId, Product>,
    next_brand_id: u64,
    next_product_id: u64,
}

impl Inner {
    fn alloc_brand_id(&mut self) -> BrandId {
        self.next_brand_id += 1;
        BrandId::new(self.next_brand_id)
    }

    fn alloc_product_id(&mut self) -> ProductId {
        self.next_product_id += 1;
        ProductId::new(self.next_product_id)
    }

    fn name_taken(&self, name: &str) -> bool {
        self.brands.values().any(|b| b.name == name)
    }
}

/// In-memory catalog store.
///
/// Ids are allocated sequentially from 1 and never reused, so product-id
/// order doubles as creation order.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Inner>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_brand(&self, name: &str) -> DomainResult<Brand> {
        let mut inner = self.write();
        if inner.name_taken(name) {
            return Err(DomainError::conflict(format!(
                "brand name already exists: {name}"
            )));
        }

        let id = inner.alloc_brand_id();
        let brand = Brand {
            id,
            name: name.to_string(),
        };
        inner.brands.insert(id, brand.clone());
        Ok(brand)
    }

    fn rename_brand(&self, id: BrandId, name: &str) -> DomainResult<Brand> {
        let mut inner = self.write();
        let mut brand = inner
            .brands
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("brand not found: {id}")))?;
        // Renaming to any existing name is rejected, the brand's own current
        // name included.
        if inner.name_taken(name) {
            return Err(DomainError::conflict(format!(
                "brand name already exists: {name}"
            )));
        }

        brand.name = name.to_string();
        inner.brands.insert(id, brand.clone());
        Ok(brand)
    }

    fn remove_brand(&self, id: BrandId) -> DomainResult<(Brand, Vec<Product>)> {
        let mut inner = self.write();
        let brand = inner
            .brands
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("brand not found: {id}")))?;

        let orphaned: Vec<ProductId> = inner
            .products
            .values()
            .filter(|p| p.brand_id == id)
            .map(|p| p.id)
            .collect();
        let cascaded = orphaned
            .into_iter()
            .filter_map(|pid| inner.products.remove(&pid))
            .collect();

        Ok((brand, cascaded))
    }

    fn brand(&self, id: BrandId) -> Option<Brand> {
        self.read().brands.get(&id).cloned()
    }

    fn brand_by_name(&self, name: &str) -> Option<Brand> {
        self.read().brands.values().find(|b| b.name == name).cloned()
    }

    fn insert_product(
        &self,
        brand_id: BrandId,
        category: Category,
        price: u64,
    ) -> DomainResult<Product> {
        let mut inner = self.write();
        if !inner.brands.contains_key(&brand_id) {
            return Err(DomainError::validation(format!(
                "brand does not exist: {brand_id}"
            )));
        }

        let id = inner.alloc_product_id();
        let product = Product {
            id,
            brand_id,
            category,
            price,
        };
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    fn update_product(&self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let mut inner = self.write();
        if let Some(brand_id) = patch.brand_id {
            if !inner.brands.contains_key(&brand_id) {
                return Err(DomainError::validation(format!(
                    "brand does not exist: {brand_id}"
                )));
            }
        }

        let product = inner
            .products
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;

        if let Some(category) = patch.category {
            if product.category != category {
                product.category = category;
            }
        }
        if let Some(price) = patch.price {
            if product.price != price {
                product.price = price;
            }
        }
        if let Some(brand_id) = patch.brand_id {
            if product.brand_id != brand_id {
                product.brand_id = brand_id;
            }
        }

        Ok(product.clone())
    }

    fn remove_product(&self, id: ProductId) -> DomainResult<Product> {
        let mut inner = self.write();
        inner
            .products
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))
    }

    fn product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id).cloned()
    }

    fn snapshot(&self) -> Vec<CatalogRow> {
        let inner = self.read();
        inner
            .products
            .values()
            .map(|p| CatalogRow {
                product_id: p.id,
                brand_id: p.brand_id,
                brand_name: inner
                    .brands
                    .get(&p.brand_id)
                    .map(|b| b.name.clone())
                    .unwrap_or_default(),
                category: p.category,
                price: p.price,
            })
            .collect()
    }
}
