use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database row for a category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}
