use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::services::ProductService;
use crate::features::storefront::dtos::{CatalogQuery, ProductDetailDto};
use crate::shared::filters::{related_products, ProductFilter};
use crate::shared::slug::find_by_slug;

/// Service composing the storefront views on top of the product collection.
///
/// Both views load the full augmented collection once and run the pure
/// presentation computations over it, matching the store's iteration order.
pub struct StorefrontService {
    products: Arc<ProductService>,
}

impl StorefrontService {
    pub fn new(products: Arc<ProductService>) -> Self {
        Self { products }
    }

    /// Catalog listing narrowed by the active filters
    pub async fn catalog(&self, query: CatalogQuery) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.list().await?;
        let filter = ProductFilter::from(query);
        Ok(filter.apply(products))
    }

    /// Resolve a product by its slug and pick its related products
    pub async fn product_by_slug(&self, slug: &str) -> Result<ProductDetailDto> {
        let products = self.products.list().await?;

        let product = find_by_slug(&products, slug)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;

        let related = related_products(&products, &product)
            .into_iter()
            .cloned()
            .collect();

        Ok(ProductDetailDto { product, related })
    }
}
