#![allow(dead_code)]

use ob_auth::{TokenClaims, TokenCodec};
use ob_db::{IngredientRepository, RestaurantRepository, UserRepository};
use ob_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub codec: Arc<TokenCodec>,
}

impl TestApp {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("Failed to create test pool");
        ob_db::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        let codec = Arc::new(TokenCodec::new(SECRET).expect("Failed to build codec"));
        let state = AppState::new(pool.clone(), codec.clone(), Duration::from_secs(900));

        Self {
            router: build_router(state, Duration::from_secs(10)),
            pool,
            codec,
        }
    }

    pub async fn restaurant(&self, name: &str) -> i64 {
        RestaurantRepository::new(self.pool.clone())
            .create(&format!("R-{}", name), name, "1 Test Street")
            .await
            .expect("Failed to create restaurant")
    }

    pub async fn ingredient(&self, code: &str) -> i64 {
        IngredientRepository::new(self.pool.clone())
            .create(code, code, "vegetable")
            .await
            .expect("Failed to create ingredient")
    }

    /// Sign up through the API and return the new user's id
    pub async fn sign_up(&self, username: &str, restaurant_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/signup",
                None,
                json!({ "username": username, "password": PASSWORD, "restaurant_id": restaurant_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {}", body);
        body["id"].as_i64().expect("signup returned no id")
    }

    /// Log in through the API and return the access token
    pub async fn login(&self, username: &str) -> String {
        let (status, body) = self
            .post(
                "/login",
                None,
                json!({ "username": username, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["access_token"]
            .as_str()
            .expect("login returned no token")
            .to_string()
    }

    pub async fn unlink(&self, user_id: i64) {
        UserRepository::new(self.pool.clone())
            .set_restaurant(user_id, 0)
            .await
            .expect("Failed to unlink user");
    }

    /// A correctly signed token that expired `seconds_ago` seconds ago
    pub fn expired_token(&self, user_id: i64, restaurant_id: i64, seconds_ago: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        self.codec
            .issue(&TokenClaims {
                subject_id: user_id,
                tenant_id: restaurant_id,
                issued_at: now - 1_000,
                expires_at: now - seconds_ago,
            })
            .expect("Failed to issue token")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }
}
