//! Order entity - one ingredient line ordered by a restaurant.
//!
//! Orders are created in batches. Every line of a batch gets its own unique
//! code built from the restaurant id, the batch timestamp and the line index,
//! so two lines of the same batch never collide even when the clock does not
//! advance between them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub code: String,
    /// Tenant the order was created under (never re-validated)
    pub restaurant_id: i64,
    pub ingredient_id: i64,
    /// Ordered quantity
    pub number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A requested order line, as received from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub ingredient_id: i64,
    pub quantity: i32,
}

/// A validated order line ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub code: String,
    pub restaurant_id: i64,
    pub ingredient_id: i64,
    pub number: i32,
}

impl NewOrder {
    /// Build the insert for line `index` of a batch stamped `batch_nanos`
    pub fn for_batch(restaurant_id: i64, batch_nanos: i64, index: usize, item: OrderItem) -> Self {
        Self {
            code: Self::code_for(restaurant_id, batch_nanos, index),
            restaurant_id,
            ingredient_id: item.ingredient_id,
            number: item.quantity,
        }
    }

    /// `ORD-{restaurant}-{nanos}-{index}`
    pub fn code_for(restaurant_id: i64, batch_nanos: i64, index: usize) -> String {
        format!("ORD-{restaurant_id}-{batch_nanos}-{index}")
    }
}
