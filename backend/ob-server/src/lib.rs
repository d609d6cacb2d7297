pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{login, profile, sign_up},
        login_request::LoginRequest,
        login_response::LoginResponse,
        profile_response::ProfileResponse,
        sign_up_request::SignUpRequest,
        sign_up_response::SignUpResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_principal::AuthenticatedPrincipal,
    orders::{
        create_orders_request::{CreateOrdersRequest, OrderLineRequest},
        create_orders_response::CreateOrdersResponse,
        order_dto::OrderDto,
        order_list_response::OrderListResponse,
        order_response::OrderResponse,
        orders::{create_orders, get_order, list_orders, list_orders_unchecked},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
