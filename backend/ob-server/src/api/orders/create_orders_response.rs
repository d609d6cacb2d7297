use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateOrdersResponse {
    pub created: usize,
}
