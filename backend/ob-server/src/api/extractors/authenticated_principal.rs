//! Axum extractor for bearer authentication

use crate::{ApiError, AppState};

use ob_auth::Principal;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The caller, authenticated from the `Authorization: Bearer <token>` header.
///
/// Put it first in a handler's arguments so credentials are checked before
/// any path or body is looked at.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedPrincipal(pub Principal);

impl FromRequestParts<AppState> for AuthenticatedPrincipal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // A non-ASCII header value counts as missing
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let principal = state.guard.authenticate(header).await?;
            log::debug!(
                "Authenticated user {} (restaurant {})",
                principal.id,
                principal.tenant_id
            );

            Ok(AuthenticatedPrincipal(principal))
        }
    }
}
