use crate::{
    ApiError, AppState, create_orders, get_order, health, list_orders, list_orders_unchecked,
    login, profile, sign_up,
};

use std::panic::Location;
use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use error_location::ErrorLocation;
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Accounts
        .route("/signup", post(sign_up))
        .route("/login", post(login))
        .route("/profile", get(profile))
        // Orders
        .route("/order/create", post(create_orders))
        .route("/order/{restaurant_id}", get(list_orders))
        .route("/order/{restaurant_id}/{order_id}", get(get_order))
        .route("/order-bac/{restaurant_id}", get(list_orders_unchecked))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // Dropping a timed-out handler also drops (and rolls back) its transaction
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    let location = ErrorLocation::from(Location::caller());
    if err.is::<Elapsed>() {
        ApiError::Timeout { location }
    } else {
        ApiError::Internal {
            message: format!("Unhandled middleware error: {}", err),
            location,
        }
    }
}
