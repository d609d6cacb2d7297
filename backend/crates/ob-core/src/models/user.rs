//! User account - the login identity attached to (at most) one restaurant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Lowercase hex SHA-256 digest of the password
    pub password_hash: String,
    /// Owning restaurant; 0 when the account is not linked to one yet
    pub restaurant_id: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the account belongs to a restaurant
    pub fn is_linked(&self) -> bool {
        self.restaurant_id > 0
    }
}
