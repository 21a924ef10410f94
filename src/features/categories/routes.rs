use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public read routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .with_state(service)
}

/// Mutating routes, gated by the admin middleware in `main`
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", post(handlers::create_category))
        .route(
            "/api/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::core::seed::seed_if_empty;
    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::shared::test_helpers::{setup_pool, test_server};
    use crate::shared::types::DeleteMessage;

    #[tokio::test]
    async fn lists_seeded_categories_ordered_by_id() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server.get("/api/categories").await;
        response.assert_status_ok();

        let categories: Vec<CategoryResponseDto> = response.json();
        assert_eq!(categories.len(), 4);
        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(categories[1].name, "Empilhadeiras");
    }

    #[tokio::test]
    async fn get_returns_category_or_404() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server.get("/api/categories/2").await;
        response.assert_status_ok();
        let category: CategoryResponseDto = response.json();
        assert_eq!(category.name, "Empilhadeiras");

        let missing = server.get("/api/categories/99").await;
        missing.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_then_read_back() {
        let pool = setup_pool().await;
        let server = test_server(pool).await;

        let response = server
            .post("/api/categories")
            .json(&json!({
                "name": "Paleteiras Elétricas",
                "icon": "fas fa-charging-station",
                "description": "Movimentação motorizada de paletes"
            }))
            .await;
        response.assert_status_ok();
        let created: CategoryResponseDto = response.json();
        assert_eq!(created.name, "Paleteiras Elétricas");

        let fetched: CategoryResponseDto = server
            .get(&format!("/api/categories/{}", created.id))
            .await
            .json();
        assert_eq!(fetched.icon, "fas fa-charging-station");
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let pool = setup_pool().await;
        let server = test_server(pool).await;

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "", "icon": "fas fa-box" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_missing_icon() {
        let pool = setup_pool().await;
        let server = test_server(pool).await;

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "Sem ícone" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_replaces_fields_or_404() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool).await;

        let response = server
            .put("/api/categories/3")
            .json(&json!({
                "name": "Macacos e Prensas",
                "icon": "fas fa-compress",
                "description": "Levantamento e prensagem"
            }))
            .await;
        response.assert_status_ok();
        let updated: CategoryResponseDto = response.json();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Macacos e Prensas");

        let missing = server
            .put("/api/categories/99")
            .json(&json!({ "name": "X", "icon": "fas fa-x" }))
            .await;
        missing.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_is_rejected_while_products_reference_it() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        let server = test_server(pool.clone()).await;

        // Category 1 has two seeded products
        let response = server.delete("/api/categories/1").await;
        response.assert_status(StatusCode::CONFLICT);

        let still_there: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(still_there, 1);
    }

    #[tokio::test]
    async fn delete_removes_unreferenced_category() {
        let pool = setup_pool().await;
        let server = test_server(pool).await;

        let created: CategoryResponseDto = server
            .post("/api/categories")
            .json(&json!({ "name": "Temporária", "icon": "fas fa-clock" }))
            .await
            .json();

        let response = server
            .delete(&format!("/api/categories/{}", created.id))
            .await;
        response.assert_status_ok();
        let message: DeleteMessage = response.json();
        assert_eq!(message.message, "Categoria deletada com sucesso");

        let missing = server.delete("/api/categories/99").await;
        missing.assert_status(StatusCode::NOT_FOUND);
    }
}
