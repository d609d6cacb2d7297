//! Order workflows.
//!
//! `create_orders()` validates the whole batch before anything is written:
//! restaurant id, non-empty batch, restaurant existence (once), then each line
//! in input order. The first offending line fails the call. Only then is the
//! batch handed to [`OrderRepository::create_bulk`], which commits all lines
//! or none.

use crate::{Result as ServiceErrorResult, ServiceError};

use ob_core::{NewOrder, Order, OrderItem};
use ob_db::{IngredientRepository, OrderRepository, RestaurantRepository};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;

/// A restaurant's orders together with its display name.
#[derive(Debug, Clone)]
pub struct RestaurantOrders {
    pub restaurant_name: String,
    pub orders: Vec<Order>,
}

#[derive(Clone)]
pub struct OrderService {
    restaurants: RestaurantRepository,
    ingredients: IngredientRepository,
    orders: OrderRepository,
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            restaurants: RestaurantRepository::new(pool.clone()),
            ingredients: IngredientRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    /// Validate and persist a batch. Returns the number of orders created.
    pub async fn create_orders(
        &self,
        tenant_id: i64,
        items: &[OrderItem],
    ) -> ServiceErrorResult<usize> {
        ensure_tenant_id(tenant_id)?;

        if items.is_empty() {
            return Err(ServiceError::EmptyItems {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.ensure_restaurant(tenant_id).await?;

        for (index, item) in items.iter().enumerate() {
            self.validate_item(index, item).await?;
        }

        let batch_nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let batch: Vec<NewOrder> = items
            .iter()
            .enumerate()
            .map(|(index, item)| NewOrder::for_batch(tenant_id, batch_nanos, index, *item))
            .collect();

        let created = self.orders.create_bulk(&batch).await?;
        info!("Created {} orders for restaurant {}", created, tenant_id);

        Ok(created)
    }

    /// All orders of a restaurant, oldest first.
    pub async fn orders_for_restaurant(
        &self,
        tenant_id: i64,
    ) -> ServiceErrorResult<RestaurantOrders> {
        ensure_tenant_id(tenant_id)?;

        let restaurant_name = self
            .restaurants
            .find_name(tenant_id)
            .await?
            .ok_or_else(|| ServiceError::TenantNotFound {
                tenant_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let orders = self.orders.find_by_restaurant(tenant_id).await?;

        Ok(RestaurantOrders {
            restaurant_name,
            orders,
        })
    }

    /// A single order, which must belong to `tenant_id`.
    pub async fn get_order(&self, order_id: i64, tenant_id: i64) -> ServiceErrorResult<Order> {
        if order_id <= 0 {
            return Err(ServiceError::InvalidOrder {
                order_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        ensure_tenant_id(tenant_id)?;

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::OrderNotFound {
                order_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if order.restaurant_id != tenant_id {
            return Err(ServiceError::Forbidden {
                order_id,
                tenant_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(order)
    }

    async fn ensure_restaurant(&self, tenant_id: i64) -> ServiceErrorResult<()> {
        if !self.restaurants.exists(tenant_id).await? {
            return Err(ServiceError::TenantNotFound {
                tenant_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    async fn validate_item(&self, index: usize, item: &OrderItem) -> ServiceErrorResult<()> {
        if item.ingredient_id <= 0 {
            return Err(ServiceError::InvalidIngredient {
                index,
                ingredient_id: item.ingredient_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if item.quantity <= 0 {
            return Err(ServiceError::InvalidQuantity {
                index,
                quantity: item.quantity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.ingredients.exists(item.ingredient_id).await? {
            return Err(ServiceError::IngredientNotFound {
                ingredient_id: item.ingredient_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn ensure_tenant_id(tenant_id: i64) -> ServiceErrorResult<()> {
    if tenant_id <= 0 {
        return Err(ServiceError::InvalidTenant {
            tenant_id,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
