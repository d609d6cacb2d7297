use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the token codec itself.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature mismatch {location}")]
    BadSignature { location: ErrorLocation },

    #[error("Token carries no subject {location}")]
    MissingSubject { location: ErrorLocation },

    #[error("Token expired at {expires_at} {location}")]
    Expired {
        expires_at: i64,
        location: ErrorLocation,
    },
}

impl TokenError {
    #[track_caller]
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Failures surfaced to request handlers.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing or malformed authorization header {location}")]
    MissingOrMalformedCredential { location: ErrorLocation },

    #[error("Invalid token: {reason} {location}")]
    InvalidToken {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error(
        "Tenant {principal_tenant} may not access tenant {resource_tenant} {location}"
    )]
    Forbidden {
        principal_tenant: i64,
        resource_tenant: i64,
        location: ErrorLocation,
    },

    #[error("Credential lookup failed: {message} {location}")]
    CredentialLookup {
        message: String,
        location: ErrorLocation,
    },
}

impl From<TokenError> for AuthError {
    #[track_caller]
    fn from(err: TokenError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            TokenError::Expired { .. } => Self::TokenExpired { location },
            other => Self::InvalidToken {
                reason: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
pub type TokenResult<T> = std::result::Result<T, TokenError>;
