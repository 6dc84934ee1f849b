use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    #[schema(example = "Widget")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Stainless widget, pack of 10")]
    pub description: String,

    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,

    #[schema(example = 100)]
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    #[schema(read_only = true)]
    pub id: Option<i32>,

    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    #[schema(example = "Widget")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Stainless widget, pack of 10")]
    pub description: String,

    #[schema(value_type = String, example = "9.99")]
    pub price: Decimal,

    #[schema(example = 100)]
    pub stock: i32,
}
