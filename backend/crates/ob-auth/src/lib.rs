pub mod auth_guard;
pub mod claims;
pub mod credential_store;
pub mod error;
pub mod password;
pub mod principal;
pub mod tenant_policy;
pub mod token_codec;

pub use auth_guard::AuthGuard;
pub use claims::{SubjectSource, TokenClaims};
pub use credential_store::CredentialStore;
pub use error::{AuthError, Result, TokenError, TokenResult};
pub use password::{hash_password, verify_password};
pub use principal::Principal;
pub use tenant_policy::{OwnershipPolicy, TenantPolicy, UncheckedPolicy};
pub use token_codec::TokenCodec;

#[cfg(test)]
mod tests;
