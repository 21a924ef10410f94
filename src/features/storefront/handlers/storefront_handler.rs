use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::storefront::dtos::{CatalogQuery, ProductDetailDto};
use crate::features::storefront::services::StorefrontService;
use crate::shared::types::ErrorBody;

/// Filtered catalog listing
///
/// Category, search term and price band combine as a logical AND; absent
/// parameters pass everything through.
#[utoipa::path(
    get,
    path = "/api/storefront/products",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Filtered product list", body = Vec<ProductResponseDto>),
    ),
    tag = "storefront"
)]
pub async fn catalog(
    State(service): State<Arc<StorefrontService>>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.catalog(query).await?;
    Ok(Json(products))
}

/// Product detail resolved by slug
///
/// The slug is recomputed from every product name; the response carries the
/// product plus up to four related items from the same category.
#[utoipa::path(
    get,
    path = "/api/storefront/products/{slug}",
    params(
        ("slug" = String, Path, description = "URL token derived from the product name")
    ),
    responses(
        (status = 200, description = "Product detail with related products", body = ProductDetailDto),
        (status = 404, description = "No product matches the slug", body = ErrorBody)
    ),
    tag = "storefront"
)]
pub async fn product_detail(
    State(service): State<Arc<StorefrontService>>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetailDto>> {
    let detail = service.product_by_slug(&slug).await?;
    Ok(Json(detail))
}
