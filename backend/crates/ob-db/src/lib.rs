pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{migrate, open_pool};
pub use error::{DbError, Result};
pub use repositories::ingredient_repository::IngredientRepository;
pub use repositories::order_repository::OrderRepository;
pub use repositories::restaurant_repository::RestaurantRepository;
pub use repositories::user_repository::UserRepository;
