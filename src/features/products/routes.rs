use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Public read routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/{id}", get(handlers::get_product))
        .with_state(service)
}

/// Mutating routes, gated by the admin middleware in `main`
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/products", post(handlers::create_product))
        .route(
            "/api/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::core::seed::seed_if_empty;
    use crate::features::products::dtos::ProductResponseDto;
    use crate::shared::test_helpers::{setup_pool, test_server};

    #[tokio::test]
    async fn lists_seeded_products_with_category_names() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server.get("/api/products").await;
        response.assert_status_ok();

        let products: Vec<ProductResponseDto> = response.json();
        assert_eq!(products.len(), 8);

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<i64>>());

        assert!(products.iter().all(|p| p.category_name.is_some()));

        // "Kit de Peças de Reposição" ships without a price (quote on request)
        let kit = products.iter().find(|p| p.id == 6).unwrap();
        assert!(kit.price.is_none());
        assert_eq!(kit.category_name.as_deref(), Some("Peças de Reposição"));
    }

    #[tokio::test]
    async fn create_with_specs_round_trips() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server
            .post("/api/products")
            .json(&json!({
                "name": "Paleteira Elétrica 2T",
                "category_id": 2,
                "price": 8900.0,
                "description": "Paleteira elétrica com bateria de longa duração.",
                "specs": {
                    "Capacidade": "2 toneladas",
                    "Bateria": "24V 85Ah"
                }
            }))
            .await;
        response.assert_status_ok();
        let created: ProductResponseDto = response.json();
        assert_eq!(created.category_name.as_deref(), Some("Empilhadeiras"));
        assert_eq!(created.specs.len(), 2);

        let fetched: ProductResponseDto = server
            .get(&format!("/api/products/{}", created.id))
            .await
            .json();
        assert_eq!(
            fetched.specs.get("Capacidade").map(String::as_str),
            Some("2 toneladas")
        );
        assert_eq!(
            fetched.specs.get("Bateria").map(String::as_str),
            Some("24V 85Ah")
        );
    }

    #[tokio::test]
    async fn update_replaces_the_whole_spec_set() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let created: ProductResponseDto = server
            .post("/api/products")
            .json(&json!({
                "name": "Macaco Jacaré 3T",
                "category_id": 3,
                "price": 950.0,
                "description": "Macaco jacaré de perfil baixo.",
                "specs": { "a": "1", "b": "2" }
            }))
            .await
            .json();

        let response = server
            .put(&format!("/api/products/{}", created.id))
            .json(&json!({
                "name": "Macaco Jacaré 3T",
                "category_id": 3,
                "price": 990.0,
                "description": "Macaco jacaré de perfil baixo.",
                "specs": { "c": "3" }
            }))
            .await;
        response.assert_status_ok();

        let updated: ProductResponseDto = response.json();
        assert_eq!(updated.specs.len(), 1);
        assert_eq!(updated.specs.get("c").map(String::as_str), Some("3"));
        assert_eq!(updated.price, Some(990.0));
    }

    #[tokio::test]
    async fn update_without_specs_clears_the_set() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let created: ProductResponseDto = server
            .post("/api/products")
            .json(&json!({
                "name": "Cinta de Amarração",
                "category_id": 4,
                "price": 75.0,
                "description": "Cinta com catraca de 5 metros.",
                "specs": { "Comprimento": "5m" }
            }))
            .await
            .json();

        let updated: ProductResponseDto = server
            .put(&format!("/api/products/{}", created.id))
            .json(&json!({
                "name": "Cinta de Amarração",
                "category_id": 4,
                "price": 75.0,
                "description": "Cinta com catraca de 5 metros."
            }))
            .await
            .json();

        assert!(updated.specs.is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_specification_rows() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool.clone()).await;

        let created: ProductResponseDto = server
            .post("/api/products")
            .json(&json!({
                "name": "Torre de Elevação",
                "category_id": 2,
                "description": "Torre de elevação manual.",
                "specs": { "Altura": "3m", "Peso": "120kg" }
            }))
            .await
            .json();

        let response = server
            .delete(&format!("/api/products/{}", created.id))
            .await;
        response.assert_status_ok();

        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM specifications WHERE product_id = ?")
                .bind(created.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn unknown_ids_return_404() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        server
            .get("/api/products/99")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .put("/api/products/99")
            .json(&json!({
                "name": "X",
                "category_id": 1,
                "description": "X"
            }))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .delete("/api/products/99")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server
            .post("/api/products")
            .json(&json!({
                "name": "Produto Órfão",
                "category_id": 99,
                "description": "Sem categoria válida."
            }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_blank_required_fields() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server
            .post("/api/products")
            .json(&json!({
                "name": "",
                "category_id": 1,
                "description": "Nome em branco."
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/api/products")
            .json(&json!({
                "name": "Sem descrição",
                "category_id": 1,
                "description": ""
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
