use std::collections::{BTreeMap, HashMap};

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::models::{ProductWithCategory, SpecificationRow};

const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.category_id, p.price, p.description, \
     p.image, p.created_at, p.updated_at, c.name AS category_name \
     FROM products p LEFT JOIN categories c ON p.category_id = c.id";

/// Service for product operations
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products ordered by id, each with its category name and
    /// specification map attached.
    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let rows: Vec<ProductWithCategory> =
            sqlx::query_as(&format!("{} ORDER BY p.id", SELECT_PRODUCT))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list products: {:?}", e);
                    AppError::Database(e)
                })?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut specs_by_product = self.specs_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let specs = specs_by_product.remove(&row.id).unwrap_or_default();
                ProductResponseDto::from_parts(row, specs)
            })
            .collect())
    }

    /// Get product by id, with category name and specification map
    pub async fn get(&self, id: i64) -> Result<ProductResponseDto> {
        let row: Option<ProductWithCategory> =
            sqlx::query_as(&format!("{} WHERE p.id = ?", SELECT_PRODUCT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get product {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

        let row = row.ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;

        let mut specs_by_product = self.specs_for(&[id]).await?;
        let specs = specs_by_product.remove(&id).unwrap_or_default();

        Ok(ProductResponseDto::from_parts(row, specs))
    }

    /// Create a product and persist its specification set in one transaction
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let specs = dto.specs.unwrap_or_default();

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, category_id, price, description, image) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&dto.name)
        .bind(dto.category_id)
        .bind(dto.price)
        .bind(&dto.description)
        .bind(&dto.image)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create product: {:?}", e);
            AppError::Database(e)
        })?;

        Self::insert_specs(&mut tx, id, &specs).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Product created: id={}, name={}", id, dto.name);

        self.get(id).await
    }

    /// Update a product, replacing its whole specification set even when the
    /// incoming set is unchanged.
    pub async fn update(&self, id: i64, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let specs = dto.specs.unwrap_or_default();

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated: Option<i64> = sqlx::query_scalar(
            "UPDATE products SET name = ?, category_id = ?, price = ?, description = ?, \
             image = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ? RETURNING id",
        )
        .bind(&dto.name)
        .bind(dto.category_id)
        .bind(dto.price)
        .bind(&dto.description)
        .bind(&dto.image)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update product {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound("Produto não encontrado".to_string()));
        }

        sqlx::query("DELETE FROM specifications WHERE product_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        Self::insert_specs(&mut tx, id, &specs).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Product updated: id={}", id);

        self.get(id).await
    }

    /// Delete a product; its specification rows go with it (cascade)
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produto não encontrado".to_string()));
        }

        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }

    /// Fetch the specification rows for a set of products in one batched
    /// query and group them by product id.
    async fn specs_for(&self, ids: &[i64]) -> Result<HashMap<i64, BTreeMap<String, String>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT product_id, spec_key, spec_value FROM specifications \
             WHERE product_id IN ({})",
            placeholders
        );

        let mut builder = sqlx::query_as::<_, SpecificationRow>(&query);
        for id in ids {
            builder = builder.bind(id);
        }

        let rows = builder.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to fetch specifications: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: HashMap<i64, BTreeMap<String, String>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.product_id)
                .or_default()
                .insert(row.spec_key, row.spec_value);
        }

        Ok(grouped)
    }

    async fn insert_specs(
        tx: &mut Transaction<'_, Sqlite>,
        product_id: i64,
        specs: &BTreeMap<String, String>,
    ) -> Result<()> {
        for (key, value) in specs {
            sqlx::query(
                "INSERT INTO specifications (product_id, spec_key, spec_value) VALUES (?, ?, ?)",
            )
            .bind(product_id)
            .bind(key)
            .bind(value)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert specification for product {}: {:?}",
                    product_id,
                    e
                );
                AppError::Database(e)
            })?;
        }

        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if count == 0 {
            return Err(AppError::NotFound("Categoria não encontrada".to_string()));
        }

        Ok(())
    }
}
