use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::storefront::handlers;
use crate::features::storefront::services::StorefrontService;

/// Public storefront routes (read-only)
pub fn routes(service: Arc<StorefrontService>) -> Router {
    Router::new()
        .route("/api/storefront/products", get(handlers::catalog))
        .route(
            "/api/storefront/products/{slug}",
            get(handlers::product_detail),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::core::seed::seed_if_empty;
    use crate::features::products::dtos::ProductResponseDto;
    use crate::features::storefront::dtos::ProductDetailDto;
    use crate::shared::test_helpers::{setup_pool, test_server};

    #[tokio::test]
    async fn catalog_without_filters_returns_everything() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let products: Vec<ProductResponseDto> =
            server.get("/api/storefront/products").await.json();
        assert_eq!(products.len(), 8);
    }

    #[tokio::test]
    async fn catalog_combines_filters_as_and() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        // Category 3 holds two jacks at 800 and 1200; the band keeps one
        let products: Vec<ProductResponseDto> = server
            .get("/api/storefront/products?category_id=3&min_price=1000&max_price=2000")
            .await
            .json();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Macaco Hidráulico 20T");
    }

    #[tokio::test]
    async fn catalog_search_matches_descriptions() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let products: Vec<ProductResponseDto> = server
            .get("/api/storefront/products?q=TONELADAS")
            .await
            .json();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| {
            p.name.to_lowercase().contains("toneladas")
                || p.description.to_lowercase().contains("toneladas")
        }));
    }

    #[tokio::test]
    async fn price_band_excludes_quote_on_request_items() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let products: Vec<ProductResponseDto> = server
            .get("/api/storefront/products?min_price=0")
            .await
            .json();
        assert_eq!(products.len(), 7);
        assert!(products.iter().all(|p| p.price.is_some()));
    }

    #[tokio::test]
    async fn product_detail_resolves_slug_and_related() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        // percent-encoded "macaco-hidráulico-10t"
        let response = server
            .get("/api/storefront/products/macaco-hidr%C3%A1ulico-10t")
            .await;
        response.assert_status_ok();

        let detail: ProductDetailDto = response.json();
        assert_eq!(detail.product.name, "Macaco Hidráulico 10T");
        // the only other product in category 3
        assert_eq!(detail.related.len(), 1);
        assert_eq!(detail.related[0].name, "Macaco Hidráulico 20T");
    }

    #[tokio::test]
    async fn unknown_slug_returns_404() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        server
            .get("/api/storefront/products/produto-inexistente")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
