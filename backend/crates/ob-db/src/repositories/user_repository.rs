use crate::repositories::from_unix;
use crate::{DbError, Result as DbErrorResult};

use ob_core::User;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    restaurant_id: i64,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            username: r.username,
            password_hash: r.password_hash,
            restaurant_id: r.restaurant_id,
            created_at: from_unix("users", "created_at", r.created_at)?,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account.
    ///
    /// A unique-constraint violation on `username` is reported as
    /// [`DbError::AlreadyExists`]; every other failure stays opaque.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        restaurant_id: i64,
    ) -> DbErrorResult<User> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (username, password_hash, restaurant_id, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(restaurant_id)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::AlreadyExists {
                    entity: "user",
                    key: username.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => DbError::from(e),
        })?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            restaurant_id,
            created_at: from_unix("users", "created_at", created_at)?,
        })
    }

    pub async fn exists_by_username(&self, username: &str) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, password_hash, COALESCE(restaurant_id, 0) AS restaurant_id, created_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, password_hash, COALESCE(restaurant_id, 0) AS restaurant_id, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Move an account to another restaurant (0 unlinks it)
    pub async fn set_restaurant(&self, id: i64, restaurant_id: i64) -> DbErrorResult<()> {
        let restaurant_id = (restaurant_id > 0).then_some(restaurant_id);

        sqlx::query("UPDATE users SET restaurant_id = ? WHERE id = ?")
            .bind(restaurant_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
