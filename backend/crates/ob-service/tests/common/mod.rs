#![allow(dead_code)]

use ob_db::{IngredientRepository, RestaurantRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ob_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_restaurant(pool: &SqlitePool, name: &str) -> i64 {
    RestaurantRepository::new(pool.clone())
        .create(&format!("R-{}", name), name, "1 Test Street")
        .await
        .expect("Failed to create test restaurant")
}

pub async fn create_test_ingredient(pool: &SqlitePool, code: &str) -> i64 {
    IngredientRepository::new(pool.clone())
        .create(code, &format!("Ingredient {}", code), "vegetable")
        .await
        .expect("Failed to create test ingredient")
}

pub async fn count_orders(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .expect("Failed to count orders")
}
