use serde::Deserialize;

use wardrobe_catalog::{Brand, Product};
use wardrobe_core::price;
use wardrobe_engine::{CategoryPriceRange, FullCoverageBrand, LowestPricePerCategory};

// -------------------------
// Request DTOs
// -------------------------
//
// Required fields arrive as `Option` so missing values produce a field-level
// validation error instead of a body-parse failure.

#[derive(Debug, Deserialize)]
pub struct BrandRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub category: Option<String>,
    pub brand_id: Option<u64>,
    pub price: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub category: Option<String>,
    pub brand_id: Option<u64>,
    pub price: Option<i64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------
//
// Mutation responses carry raw integer prices; aggregation responses carry
// pre-formatted strings.

pub fn data(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": value })
}

pub fn brand_to_json(brand: &Brand) -> serde_json::Value {
    serde_json::json!({
        "id": brand.id.value(),
        "name": brand.name,
    })
}

pub fn product_to_json(product: &Product, brand: &Brand) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.value(),
        "category_name": product.category.title(),
        "brand": brand_to_json(brand),
        "price": product.price,
    })
}

pub fn lowest_price_to_json(result: &LowestPricePerCategory) -> serde_json::Value {
    serde_json::json!({
        "products": result.products.iter().map(|p| serde_json::json!({
            "category": p.category.title(),
            "brand": p.brand,
            "price": price::format(p.price),
        })).collect::<Vec<_>>(),
        "total_price": price::format(result.total_price),
    })
}

pub fn full_coverage_brand_to_json(result: &FullCoverageBrand) -> serde_json::Value {
    serde_json::json!({
        "brand_name": result.brand_name,
        "category_products": result.category_prices.iter().map(|p| serde_json::json!({
            "category": p.category.title(),
            "price": price::format(p.price),
        })).collect::<Vec<_>>(),
        "total_price": price::format(result.total_price),
    })
}

pub fn price_range_to_json(result: &CategoryPriceRange) -> serde_json::Value {
    let brand_prices = |list: &[wardrobe_engine::BrandPrice]| {
        list.iter()
            .map(|b| {
                serde_json::json!({
                    "brand": b.brand,
                    "price": price::format(b.price),
                })
            })
            .collect::<Vec<_>>()
    };

    serde_json::json!({
        "category": result.category.title(),
        "lowest": brand_prices(&result.lowest),
        "highest": brand_prices(&result.highest),
    })
}
