use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RestaurantRepository {
    pool: SqlitePool,
}

impl RestaurantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a restaurant and return its id
    pub async fn create(&self, code: &str, name: &str, address: &str) -> DbErrorResult<i64> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO restaurants (code, name, address, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(address)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn exists(&self, id: i64) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM restaurants WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn find_name(&self, id: i64) -> DbErrorResult<Option<String>> {
        let name = sqlx::query_scalar("SELECT name FROM restaurants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name)
    }
}
