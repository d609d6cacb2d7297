use serde::Deserialize;

/// Missing fields decode as empty/zero and fail validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub restaurant_id: i64,
}
