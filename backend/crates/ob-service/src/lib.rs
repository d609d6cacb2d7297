pub mod error;
pub mod order_service;
pub mod user_service;

pub use error::{Result, ServiceError};
pub use order_service::{OrderService, RestaurantOrders};
pub use user_service::{UserProfile, UserService};
