use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct IngredientRepository {
    pool: SqlitePool,
}

impl IngredientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an ingredient and return its id
    pub async fn create(&self, code: &str, name: &str, kind: &str) -> DbErrorResult<i64> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO ingredients (code, name, type, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(kind)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn exists(&self, id: i64) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM ingredients WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
