use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Joined database row: product columns plus the referenced category's name.
///
/// `category_name` stays optional at the row level (LEFT JOIN); the delete
/// guard on categories keeps it populated for every product reachable
/// through the API.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithCategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub price: Option<f64>,
    pub description: String,
    pub image: Option<String>,
    pub category_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One key/value attribute of a product
#[derive(Debug, Clone, FromRow)]
pub struct SpecificationRow {
    pub product_id: i64,
    pub spec_key: String,
    pub spec_value: String,
}
