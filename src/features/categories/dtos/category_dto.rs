use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub name: String,

    /// Icon class identifier shown next to the category (e.g. "fas fa-dolly")
    #[validate(length(min = 1, max = 255, message = "Ícone é obrigatório"))]
    pub icon: String,

    pub description: Option<String>,
}

/// Request DTO for updating a category (full replacement)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Ícone é obrigatório"))]
    pub icon: String,

    pub description: Option<String>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            icon: c.icon,
            description: c.description,
            created_at: c.created_at,
        }
    }
}
