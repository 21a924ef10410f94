#[cfg(test)]
use std::str::FromStr;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::features::categories::{routes as categories_routes, CategoryService};
#[cfg(test)]
use crate::features::products::dtos::ProductResponseDto;
#[cfg(test)]
use crate::features::products::{routes as products_routes, ProductService};
#[cfg(test)]
use crate::features::storefront::{routes as storefront_routes, StorefrontService};

/// Fresh in-memory SQLite store with the full schema applied.
///
/// Pinned to a single connection: every `:memory:` connection is its own
/// database, and the pool must never recycle the one holding the data.
#[cfg(test)]
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory SQLite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory SQLite pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

/// Full application router wired the way `main` wires it, minus the
/// HTTP-level layers and the admin gate.
#[cfg(test)]
pub async fn test_server(pool: SqlitePool) -> TestServer {
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let product_service = Arc::new(ProductService::new(pool.clone()));
    let storefront_service = Arc::new(StorefrontService::new(Arc::clone(&product_service)));

    let app = Router::new()
        .merge(categories_routes::routes(Arc::clone(&category_service)))
        .merge(categories_routes::admin_routes(category_service))
        .merge(products_routes::routes(Arc::clone(&product_service)))
        .merge(products_routes::admin_routes(product_service))
        .merge(storefront_routes::routes(storefront_service));

    TestServer::new(app).expect("test server")
}

/// Product DTO fixture for the pure presentation-logic tests
#[cfg(test)]
pub fn product_fixture(
    id: i64,
    category_id: i64,
    name: &str,
    description: &str,
    price: Option<f64>,
) -> ProductResponseDto {
    let timestamp = chrono::NaiveDate::from_ymd_opt(2024, 5, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    ProductResponseDto {
        id,
        name: name.to_string(),
        category_id,
        category_name: None,
        price,
        description: description.to_string(),
        image: None,
        specs: Default::default(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}
