use ob_core::Order;

use chrono::SecondsFormat;
use serde::Serialize;

/// Order DTO for JSON serialization; timestamps are RFC 3339
#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: i64,
    pub code: String,
    pub restaurant_id: i64,
    pub ingredient_id: i64,
    pub number: i32,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            code: o.code,
            restaurant_id: o.restaurant_id,
            ingredient_id: o.ingredient_id,
            number: o.number,
            created_at: o.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: o
                .updated_at
                .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}
