use crate::{AuthError, Result as AuthErrorResult};

use ob_core::User;
use ob_db::UserRepository;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Resolves a token subject to its account.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user(&self, id: i64) -> AuthErrorResult<Option<User>>;
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_user(&self, id: i64) -> AuthErrorResult<Option<User>> {
        self.find_by_id(id)
            .await
            .map_err(|e| AuthError::CredentialLookup {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
