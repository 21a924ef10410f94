use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;

const SELECT_CATEGORY: &str = "SELECT id, name, icon, description, created_at FROM categories";

/// Service for category operations
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories: Vec<Category> =
            sqlx::query_as(&format!("{} ORDER BY id", SELECT_CATEGORY))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list categories: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by id
    pub async fn get(&self, id: i64) -> Result<CategoryResponseDto> {
        let category: Option<Category> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_CATEGORY))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get category {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))
    }

    /// Create a new category
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category: Category = sqlx::query_as(
            "INSERT INTO categories (name, icon, description) VALUES (?, ?, ?) \
             RETURNING id, name, icon, description, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.icon)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// Update a category (full replacement of its fields)
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category: Option<Category> = sqlx::query_as(
            "UPDATE categories SET name = ?, icon = ?, description = ? WHERE id = ? \
             RETURNING id, name, icon, description, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.icon)
        .bind(&dto.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))
    }

    /// Delete a category.
    ///
    /// Rejected while any product still references the category, so no
    /// caller can orphan products regardless of which view issued the call.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let referencing: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count products for category {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        if referencing > 0 {
            return Err(AppError::Conflict(format!(
                "Categoria possui {} produto(s) vinculado(s) e não pode ser removida",
                referencing
            )));
        }

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Categoria não encontrada".to_string()));
        }

        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }
}
