pub mod create_orders_request;
pub mod create_orders_response;
pub mod order_dto;
pub mod order_list_response;
pub mod order_response;
#[allow(clippy::module_inception)]
pub mod orders;
