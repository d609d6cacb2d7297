//! Account workflows: signup, login and profile.
//!
//! Signup stores the digest of the password as given; login trims the
//! password before hashing it. A password with surrounding whitespace can
//! therefore be registered but never used to log in.

use crate::{Result as ServiceErrorResult, ServiceError};

use ob_auth::{TokenClaims, TokenCodec, hash_password, verify_password};
use ob_core::{User, is_valid_password, is_valid_username};
use ob_db::{DbError, RestaurantRepository, UserRepository};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub restaurant_id: i64,
    /// Empty when the account is not linked to a restaurant
    pub restaurant_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
    restaurants: RestaurantRepository,
    codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl UserService {
    pub fn new(pool: SqlitePool, codec: Arc<TokenCodec>, token_ttl: Duration) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            restaurants: RestaurantRepository::new(pool),
            codec,
            token_ttl,
        }
    }

    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        restaurant_id: i64,
    ) -> ServiceErrorResult<User> {
        let username = username.trim();
        if !is_valid_username(username) {
            return Err(ServiceError::InvalidUsername {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !is_valid_password(password) {
            return Err(ServiceError::InvalidPassword {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if restaurant_id <= 0 {
            return Err(ServiceError::InvalidTenant {
                tenant_id: restaurant_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.restaurants.exists(restaurant_id).await? {
            return Err(ServiceError::TenantNotFound {
                tenant_id: restaurant_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.users.exists_by_username(username).await? {
            return Err(username_taken(username));
        }

        // A concurrent signup can still win the race; the unique index decides
        let user = self
            .users
            .create(username, &hash_password(password), restaurant_id)
            .await
            .map_err(|e| match e {
                DbError::AlreadyExists { .. } => username_taken(username),
                other => ServiceError::from(other),
            })?;

        info!("Registered user {} for restaurant {}", user.id, restaurant_id);
        Ok(user)
    }

    /// Check credentials and issue an access token.
    pub async fn login(&self, username: &str, password: &str) -> ServiceErrorResult<String> {
        let username = username.trim();
        let password = password.trim();

        if !is_valid_username(username) || !is_valid_password(password) {
            return Err(invalid_credentials());
        }

        let Some(user) = self.users.find_by_username(username).await? else {
            warn!("Login attempt for unknown user");
            return Err(invalid_credentials());
        };

        if !verify_password(password, &user.password_hash) {
            warn!("Password mismatch for user {}", user.id);
            return Err(invalid_credentials());
        }

        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX);
        let token = self.codec.issue(&TokenClaims {
            subject_id: user.id,
            tenant_id: user.restaurant_id,
            issued_at: now,
            expires_at: now.saturating_add(ttl),
        })?;

        Ok(token)
    }

    pub async fn profile(&self, user_id: i64) -> ServiceErrorResult<UserProfile> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound {
                user_id,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let restaurant_name = if user.is_linked() {
            self.restaurants
                .find_name(user.restaurant_id)
                .await?
                .ok_or_else(|| ServiceError::TenantNotFound {
                    tenant_id: user.restaurant_id,
                    location: ErrorLocation::from(Location::caller()),
                })?
        } else {
            String::new()
        };

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            restaurant_id: user.restaurant_id,
            restaurant_name,
            created_at: user.created_at,
        })
    }
}

#[track_caller]
fn username_taken(username: &str) -> ServiceError {
    ServiceError::UsernameTaken {
        username: username.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn invalid_credentials() -> ServiceError {
    ServiceError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
