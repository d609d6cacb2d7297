#[allow(clippy::module_inception)]
pub mod accounts;
pub mod login_request;
pub mod login_response;
pub mod profile_response;
pub mod sign_up_request;
pub mod sign_up_response;
