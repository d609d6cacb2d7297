//! Order REST API handlers
//!
//! `/order/{id}` and `/order-bac/{id}` run the same listing and differ only in
//! the tenant policy applied. Both authenticate first, so a bad or expired
//! token is rejected identically on either route.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedPrincipal, CreateOrdersRequest,
    CreateOrdersResponse, OrderListResponse, OrderResponse,
};

use ob_auth::{OwnershipPolicy, Principal, TenantPolicy, UncheckedPolicy};
use ob_core::OrderItem;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /order/create
pub async fn create_orders(
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    State(state): State<AppState>,
    payload: Result<Json<CreateOrdersRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateOrdersResponse>)> {
    let Json(request) = payload?;

    let tenant_id = match request.restaurant_id {
        0 => principal.tenant_id,
        requested => requested,
    };

    if !OwnershipPolicy.allows(&principal, tenant_id) {
        return Err(ApiError::Forbidden {
            message: "restaurant mismatch".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let items: Vec<OrderItem> = request.orders.into_iter().map(OrderItem::from).collect();
    let created = state
        .orders
        .create_orders(tenant_id, &items)
        .await
        .map_err(|e| ApiError::from(e).not_found_as_bad_request())?;

    Ok((StatusCode::CREATED, Json(CreateOrdersResponse { created })))
}

/// GET /order/{restaurant_id}
///
/// Caller must belong to the restaurant (or be unscoped).
pub async fn list_orders(
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> ApiResult<Json<OrderListResponse>> {
    list_for_restaurant(&state, &principal, &restaurant_id, &OwnershipPolicy).await
}

/// GET /order-bac/{restaurant_id}
///
/// Any authenticated caller may list any restaurant.
pub async fn list_orders_unchecked(
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> ApiResult<Json<OrderListResponse>> {
    list_for_restaurant(&state, &principal, &restaurant_id, &UncheckedPolicy).await
}

/// GET /order/{restaurant_id}/{order_id}
pub async fn get_order(
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    State(state): State<AppState>,
    Path((restaurant_id, order_id)): Path<(String, String)>,
) -> ApiResult<Json<OrderResponse>> {
    let tenant_id = parse_id(&restaurant_id, "invalid restaurant id")?;
    let order_id = parse_id(&order_id, "invalid order id")?;

    OwnershipPolicy.authorize(&principal, tenant_id)?;

    let order = state.orders.get_order(order_id, tenant_id).await?;

    Ok(Json(OrderResponse {
        order: order.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

async fn list_for_restaurant(
    state: &AppState,
    principal: &Principal,
    raw_restaurant_id: &str,
    policy: &dyn TenantPolicy,
) -> ApiResult<Json<OrderListResponse>> {
    let tenant_id = parse_id(raw_restaurant_id, "invalid restaurant id")?;

    policy.authorize(principal, tenant_id)?;

    let listing = state.orders.orders_for_restaurant(tenant_id).await?;

    Ok(Json(listing.into()))
}

/// Path ids must be positive integers
#[track_caller]
fn parse_id(raw: &str, message: &'static str) -> ApiResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request(message)),
    }
}
