use ob_db::{IngredientRepository, RestaurantRepository};

use sqlx::SqlitePool;

/// Inserts a restaurant and returns its id
pub async fn create_test_restaurant(pool: &SqlitePool, name: &str) -> i64 {
    RestaurantRepository::new(pool.clone())
        .create(&format!("R-{}", name), name, "1 Test Street")
        .await
        .expect("Failed to create test restaurant")
}

/// Inserts an ingredient and returns its id
pub async fn create_test_ingredient(pool: &SqlitePool, code: &str) -> i64 {
    IngredientRepository::new(pool.clone())
        .create(code, &format!("Ingredient {}", code), "vegetable")
        .await
        .expect("Failed to create test ingredient")
}

/// Number of order rows stored for a restaurant
pub async fn count_orders(pool: &SqlitePool, restaurant_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE restaurant_id = ?")
        .bind(restaurant_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count orders")
}

/// Reads a single text column of a row straight from the table
pub async fn read_column(pool: &SqlitePool, table: &str, column: &str, id: i64) -> String {
    sqlx::query_scalar(&format!("SELECT {} FROM {} WHERE id = ?", column, table))
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to read column")
}
