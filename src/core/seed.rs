use sqlx::SqlitePool;

// Initial catalog shipped with the application. Inserted only when the
// categories table is empty; an already-populated store is never touched.
const DEFAULT_CATEGORIES: [(&str, &str, &str); 4] = [
    (
        "Carrinhos Hidráulicos",
        "fas fa-dolly",
        "Carrinhos de transporte com sistema hidráulico",
    ),
    (
        "Empilhadeiras",
        "fas fa-pallet",
        "Equipamentos para movimentação de carga",
    ),
    (
        "Macacos Hidráulicos",
        "fas fa-cog",
        "Macacos de diferentes capacidades",
    ),
    (
        "Peças de Reposição",
        "fas fa-tools",
        "Componentes e peças para manutenção",
    ),
];

const DEFAULT_PRODUCTS: [(&str, i64, Option<f64>, &str); 8] = [
    (
        "Carrinho Hidráulico 2.5T",
        1,
        Some(1500.0),
        "Carrinho hidráulico com capacidade de 2.5 toneladas, ideal para pequenos e médios comércios.",
    ),
    (
        "Carrinho Hidráulico 5T",
        1,
        Some(2500.0),
        "Carrinho hidráulico profissional com capacidade de 5 toneladas, perfeito para operações intensivas.",
    ),
    (
        "Empilhadeira Manual 1.5T",
        2,
        Some(3500.0),
        "Empilhadeira manual com capacidade de 1.5 toneladas, operação simples e eficiente.",
    ),
    (
        "Macaco Hidráulico 10T",
        3,
        Some(800.0),
        "Macaco hidráulico com capacidade de 10 toneladas, ideal para levantamento de cargas.",
    ),
    (
        "Macaco Hidráulico 20T",
        3,
        Some(1200.0),
        "Macaco hidráulico de alta capacidade com 20 toneladas, para operações pesadas.",
    ),
    (
        "Kit de Peças de Reposição",
        4,
        None,
        "Kit completo com peças de reposição para manutenção de equipamentos hidráulicos.",
    ),
    (
        "Óleo Hidráulico Premium 20L",
        4,
        Some(350.0),
        "Óleo hidráulico de alta qualidade, 20 litros, para melhor desempenho dos equipamentos.",
    ),
    (
        "Cilindro Hidráulico 50mm",
        4,
        Some(600.0),
        "Cilindro hidráulico com diâmetro de 50mm, peça de reposição de alta qualidade.",
    ),
];

/// Insert the default categories and products when the store starts empty.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    for (name, icon, description) in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (name, icon, description) VALUES (?, ?, ?)")
            .bind(name)
            .bind(icon)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    for (name, category_id, price, description) in DEFAULT_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, category_id, price, description) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(category_id)
        .bind(price)
        .bind(description)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Default catalog seeded: {} categories, {} products",
        DEFAULT_CATEGORIES.len(),
        DEFAULT_PRODUCTS.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::setup_pool;

    #[tokio::test]
    async fn seeds_empty_store() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();

        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(categories, 4);
        assert_eq!(products, 8);
    }

    #[tokio::test]
    async fn second_run_inserts_nothing() {
        let pool = setup_pool().await;
        seed_if_empty(&pool).await.unwrap();
        seed_if_empty(&pool).await.unwrap();

        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(categories, 4);
        assert_eq!(products, 8);
    }

    #[tokio::test]
    async fn never_touches_populated_store() {
        let pool = setup_pool().await;

        sqlx::query("INSERT INTO categories (name, icon, description) VALUES (?, ?, ?)")
            .bind("Existente")
            .bind("fas fa-box")
            .bind("Categoria previamente cadastrada")
            .execute(&pool)
            .await
            .unwrap();

        seed_if_empty(&pool).await.unwrap();

        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(categories, 1);
    }
}
