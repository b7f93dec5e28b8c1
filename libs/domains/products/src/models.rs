use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category as the API exposes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[schema(example = 1)]
    pub category_id: i32,
    /// Category description
    #[schema(example = "Frutas y verduras")]
    pub category: String,
    pub active: bool,
}

/// A supermarket product.
///
/// `productId` is omitted (or null) in a POST body for a product that has
/// not been stored yet; responses always carry it. `category` is filled in
/// from the stored category on reads and ignored on writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    #[schema(example = 7)]
    pub product_id: Option<i32>,
    #[schema(example = "Guayaba Feijoa")]
    pub name: String,
    #[schema(example = 1)]
    pub category_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 300.0)]
    pub price: Decimal,
    #[schema(example = 500)]
    pub stock: i32,
    pub active: bool,
    #[serde(default)]
    pub category: Option<Category>,
}
