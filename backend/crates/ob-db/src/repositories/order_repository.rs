//! Order repository.
//!
//! ## Batch atomicity
//!
//! `create_bulk()` writes a whole batch inside one transaction. If any insert
//! fails the transaction is dropped without commit, which rolls back every row
//! already written for that call. The same happens when the calling future is
//! dropped mid-batch (e.g. a request timeout): nothing is committed.

use crate::repositories::from_unix;
use crate::{DbError, Result as DbErrorResult};

use ob_core::{NewOrder, Order};

use chrono::Utc;
use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct OrderRow {
    id: i64,
    code: String,
    restaurant_id: i64,
    ingredient_id: i64,
    number: i32,
    created_at: i64,
    updated_at: Option<i64>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DbError;

    fn try_from(r: OrderRow) -> DbErrorResult<Self> {
        Ok(Order {
            id: r.id,
            code: r.code,
            restaurant_id: r.restaurant_id,
            ingredient_id: r.ingredient_id,
            number: r.number,
            created_at: from_unix("orders", "created_at", r.created_at)?,
            updated_at: r
                .updated_at
                .map(|ts| from_unix("orders", "updated_at", ts))
                .transpose()?,
        })
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert every order of a batch, all or nothing.
    /// Returns the number of rows written.
    pub async fn create_bulk(&self, orders: &[NewOrder]) -> DbErrorResult<usize> {
        if orders.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        for order in orders {
            // `?` drops `tx` uncommitted, rolling back the rows written so far
            sqlx::query(
                r#"
                    INSERT INTO orders (code, restaurant_id, ingredient_id, number, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&order.code)
            .bind(order.restaurant_id)
            .bind(order.ingredient_id)
            .bind(order.number)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!("Committed {} orders", orders.len());

        Ok(orders.len())
    }

    pub async fn find_by_restaurant(&self, restaurant_id: i64) -> DbErrorResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
                SELECT id, code, restaurant_id, ingredient_id, number, created_at, updated_at
                FROM orders
                WHERE restaurant_id = ?
                ORDER BY id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Order::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
                SELECT id, code, restaurant_id, ingredient_id, number, created_at, updated_at
                FROM orders
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }
}
