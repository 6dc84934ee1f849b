use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub stock: i32,
    pub created_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Catalog listing plus the caller's action capabilities, so the
/// presentation layer can decide which buttons to offer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub can_add: bool,
    pub can_change: bool,
    pub can_delete: bool,
}

/// Payload behind the form-display endpoints. `product` is absent for a
/// blank creation form and carries the current snapshot for edit/delete.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductFormResponse {
    pub action: String,
    pub product: Option<ProductResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DeletedProductResponse {
    pub id: i32,
    pub name: String,
}
