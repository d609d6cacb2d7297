use ob_core::OrderItem;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateOrdersRequest {
    /// 0 means "the caller's restaurant"
    pub restaurant_id: i64,
    pub orders: Vec<OrderLineRequest>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OrderLineRequest {
    pub ingredient_id: i64,
    /// Quantity
    pub number: i32,
}

impl From<OrderLineRequest> for OrderItem {
    fn from(line: OrderLineRequest) -> Self {
        Self {
            ingredient_id: line.ingredient_id,
            quantity: line.number,
        }
    }
}
