use ob_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub id: i64,
    pub username: String,
    pub restaurant_id: i64,
}

impl From<User> for SignUpResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            restaurant_id: user.restaurant_id,
        }
    }
}
