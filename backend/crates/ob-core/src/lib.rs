pub mod credentials;
pub mod models;

pub use credentials::{
    PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH, is_valid_password,
    is_valid_username,
};
pub use models::order::{NewOrder, Order, OrderItem};
pub use models::user::User;

#[cfg(test)]
mod tests;
