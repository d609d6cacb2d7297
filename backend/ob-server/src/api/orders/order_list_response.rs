use crate::OrderDto;

use ob_service::RestaurantOrders;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub count: usize,
    pub restaurant_name: String,
    pub orders: Vec<OrderDto>,
}

impl From<RestaurantOrders> for OrderListResponse {
    fn from(listing: RestaurantOrders) -> Self {
        Self {
            count: listing.orders.len(),
            restaurant_name: listing.restaurant_name,
            orders: listing.orders.into_iter().map(OrderDto::from).collect(),
        }
    }
}
