use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::products::models::ProductWithCategory;

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub name: String,

    pub category_id: i64,

    /// Absent price means "quote on request"
    pub price: Option<f64>,

    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub description: String,

    /// Image URL or data URI, passed through untouched
    pub image: Option<String>,

    /// Key/value attributes persisted as the product's specification set
    #[serde(default)]
    pub specs: Option<BTreeMap<String, String>>,
}

/// Request DTO for updating a product (full replacement, specs included)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub name: String,

    pub category_id: i64,

    pub price: Option<f64>,

    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub description: String,

    pub image: Option<String>,

    #[serde(default)]
    pub specs: Option<BTreeMap<String, String>>,
}

/// Response DTO for product, augmented with the category name and the
/// specification map. Never emitted before its `specs` are attached.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub price: Option<f64>,
    pub description: String,
    pub image: Option<String>,
    pub specs: BTreeMap<String, String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProductResponseDto {
    pub fn from_parts(row: ProductWithCategory, specs: BTreeMap<String, String>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category_id: row.category_id,
            category_name: row.category_name,
            price: row.price,
            description: row.description,
            image: row.image,
            specs,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
