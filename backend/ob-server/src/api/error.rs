//! REST API error types
//!
//! Every failure is rendered as `{"error": "<message>"}`. Messages are fixed
//! per kind; the underlying cause (with its location) only goes to the log.

use ob_auth::AuthError;
use ob_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

pub const INTERNAL_MESSAGE: &str = "internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 408
    #[error("Request timed out {location}")]
    Timeout { location: ErrorLocation },

    /// 500; `message` is the cause and only reaches the log
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. } => message.as_str(),
            Self::Timeout { .. } => "request timed out",
            Self::Internal { .. } => INTERNAL_MESSAGE,
        }
    }

    /// Write endpoints report missing referenced rows as bad input.
    pub fn not_found_as_bad_request(self) -> Self {
        match self {
            Self::NotFound { message, location } => Self::BadRequest { message, location },
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = ApiErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            AuthError::MissingOrMalformedCredential { .. } => Self::Unauthorized {
                message: "missing or invalid authorization header".to_string(),
                location,
            },
            AuthError::InvalidToken { .. } => Self::Unauthorized {
                message: "invalid token".to_string(),
                location,
            },
            AuthError::TokenExpired { .. } => Self::Unauthorized {
                message: "token expired".to_string(),
                location,
            },
            AuthError::Forbidden { .. } => Self::Forbidden {
                message: "order data does not belong to your restaurant".to_string(),
                location,
            },
            AuthError::CredentialLookup { .. } => Self::Internal {
                message: err.to_string(),
                location,
            },
        }
    }
}

impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(err: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = |m: &str| m.to_string();

        match err {
            ServiceError::InvalidTenant { .. } => Self::BadRequest {
                message: message("invalid restaurant id"),
                location,
            },
            ServiceError::EmptyItems { .. } => Self::BadRequest {
                message: message("orders must include at least one item"),
                location,
            },
            ServiceError::InvalidIngredient { .. } => Self::BadRequest {
                message: message("invalid ingredient id"),
                location,
            },
            ServiceError::InvalidQuantity { .. } => Self::BadRequest {
                message: message("invalid number"),
                location,
            },
            ServiceError::InvalidOrder { .. } => Self::BadRequest {
                message: message("invalid order id"),
                location,
            },
            ServiceError::InvalidUsername { .. } => Self::BadRequest {
                message: message("invalid username"),
                location,
            },
            ServiceError::InvalidPassword { .. } => Self::BadRequest {
                message: message("invalid password"),
                location,
            },
            ServiceError::TenantNotFound { .. } => Self::NotFound {
                message: message("restaurant not found"),
                location,
            },
            ServiceError::IngredientNotFound { .. } => Self::NotFound {
                message: message("ingredient not found"),
                location,
            },
            ServiceError::OrderNotFound { .. } => Self::NotFound {
                message: message("order not found"),
                location,
            },
            ServiceError::Forbidden { .. } => Self::Forbidden {
                message: message("order data does not belong to your restaurant"),
                location,
            },
            ServiceError::UsernameTaken { .. } => Self::Conflict {
                message: message("username already exists"),
                location,
            },
            ServiceError::InvalidCredentials { .. } => Self::Unauthorized {
                message: message("invalid username or password"),
                location,
            },
            // The token was valid but its account is gone
            ServiceError::UserNotFound { .. } => Self::Unauthorized {
                message: message("invalid token"),
                location,
            },
            ServiceError::Token { .. } | ServiceError::Database { .. } => Self::Internal {
                message: err.to_string(),
                location,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        Self::bad_request("invalid JSON payload")
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
