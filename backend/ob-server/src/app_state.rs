use ob_auth::{AuthGuard, TokenCodec};
use ob_db::UserRepository;
use ob_service::{OrderService, UserService};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared handler state. The codec (and so the secret) is injected once here.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub guard: Arc<AuthGuard<UserRepository>>,
    pub orders: OrderService,
    pub users: UserService,
}

impl AppState {
    pub fn new(pool: SqlitePool, codec: Arc<TokenCodec>, token_ttl: Duration) -> Self {
        Self {
            guard: Arc::new(AuthGuard::new(
                codec.clone(),
                UserRepository::new(pool.clone()),
            )),
            orders: OrderService::new(pool.clone()),
            users: UserService::new(pool.clone(), codec, token_ttl),
            pool,
        }
    }
}
