use ob_service::UserProfile;

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub user_name: String,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    /// RFC 3339
    pub created_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            user_name: p.username,
            restaurant_id: p.restaurant_id,
            restaurant_name: p.restaurant_name,
            created_at: p.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
