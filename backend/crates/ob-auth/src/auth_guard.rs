use crate::{AuthError, CredentialStore, Principal, Result as AuthErrorResult, TokenClaims, TokenCodec};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;

const BEARER_PREFIX: &str = "Bearer ";

/// Turns an `Authorization` header value into a [`Principal`].
pub struct AuthGuard<S> {
    codec: Arc<TokenCodec>,
    store: S,
}

impl<S: CredentialStore> AuthGuard<S> {
    pub fn new(codec: Arc<TokenCodec>, store: S) -> Self {
        Self { codec, store }
    }

    pub async fn authenticate(&self, header: Option<&str>) -> AuthErrorResult<Principal> {
        self.authenticate_at(header, Utc::now().timestamp()).await
    }

    /// Authenticate as if the current unix time were `now`.
    pub async fn authenticate_at(
        &self,
        header: Option<&str>,
        now: i64,
    ) -> AuthErrorResult<Principal> {
        let token = bearer_token(header)?;
        let claims = self.codec.decode_at(token, now).map_err(|e| {
            debug!("Token rejected: {}", e);
            AuthError::from(e)
        })?;

        self.resolve(&claims).await
    }

    /// The account record is authoritative for the tenant, not the token.
    async fn resolve(&self, claims: &TokenClaims) -> AuthErrorResult<Principal> {
        let user = self.store.find_user(claims.subject_id).await?.ok_or_else(|| {
            debug!("Token subject {} has no account", claims.subject_id);
            AuthError::InvalidToken {
                reason: "unknown subject".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Principal {
            id: user.id,
            tenant_id: user.restaurant_id,
        })
    }
}

/// Extract the token from `Bearer <token>`; the prefix is case-sensitive.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::MissingOrMalformedCredential {
            location: ErrorLocation::from(Location::caller()),
        })
}
