use ob_auth::TokenError;
use ob_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid restaurant id {tenant_id} {location}")]
    InvalidTenant {
        tenant_id: i64,
        location: ErrorLocation,
    },

    #[error("Order batch is empty {location}")]
    EmptyItems { location: ErrorLocation },

    #[error("Restaurant {tenant_id} not found {location}")]
    TenantNotFound {
        tenant_id: i64,
        location: ErrorLocation,
    },

    #[error("Invalid ingredient id {ingredient_id} at line {index} {location}")]
    InvalidIngredient {
        index: usize,
        ingredient_id: i64,
        location: ErrorLocation,
    },

    #[error("Invalid quantity {quantity} at line {index} {location}")]
    InvalidQuantity {
        index: usize,
        quantity: i32,
        location: ErrorLocation,
    },

    #[error("Ingredient {ingredient_id} not found {location}")]
    IngredientNotFound {
        ingredient_id: i64,
        location: ErrorLocation,
    },

    #[error("Invalid order id {order_id} {location}")]
    InvalidOrder {
        order_id: i64,
        location: ErrorLocation,
    },

    #[error("Order {order_id} not found {location}")]
    OrderNotFound {
        order_id: i64,
        location: ErrorLocation,
    },

    #[error("Order {order_id} does not belong to restaurant {tenant_id} {location}")]
    Forbidden {
        order_id: i64,
        tenant_id: i64,
        location: ErrorLocation,
    },

    #[error("Invalid username {location}")]
    InvalidUsername { location: ErrorLocation },

    #[error("Invalid password {location}")]
    InvalidPassword { location: ErrorLocation },

    #[error("Username '{username}' already taken {location}")]
    UsernameTaken {
        username: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User {user_id} not found {location}")]
    UserNotFound {
        user_id: i64,
        location: ErrorLocation,
    },

    #[error("Token error: {source} {location}")]
    Token {
        #[source]
        source: TokenError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<TokenError> for ServiceError {
    #[track_caller]
    fn from(source: TokenError) -> Self {
        Self::Token {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
