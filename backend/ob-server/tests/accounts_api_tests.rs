mod common;

use common::{PASSWORD, TestApp};

use googletest::prelude::*;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn given_valid_signup_then_created_with_account_fields() {
    let app = TestApp::new().await;
    let alpha = app.restaurant("Alpha").await;

    let (status, body) = app
        .post(
            "/signup",
            None,
            json!({ "username": "  alice  ", "password": PASSWORD, "restaurant_id": alpha }),
        )
        .await;

    assert_that!(status, eq(StatusCode::CREATED));
    assert_eq!(body["username"], "alice");
    assert_eq!(body["restaurant_id"], alpha);
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn given_taken_username_when_signing_up_then_conflict() {
    let app = TestApp::new().await;
    let alpha = app.restaurant("Alpha").await;
    app.sign_up("alice", alpha).await;

    let (status, body) = app
        .post(
            "/signup",
            None,
            json!({ "username": "alice", "password": PASSWORD, "restaurant_id": alpha }),
        )
        .await;

    assert_that!(status, eq(StatusCode::CONFLICT));
    assert_eq!(body["error"], "username already exists");
}

#[tokio::test]
async fn given_rejected_signups_then_bad_request_with_reason() {
    let app = TestApp::new().await;
    let alpha = app.restaurant("Alpha").await;

    let cases = [
        (json!({ "username": "al", "password": PASSWORD, "restaurant_id": alpha }), "invalid username"),
        (json!({ "username": "al ice", "password": PASSWORD, "restaurant_id": alpha }), "invalid username"),
        (json!({ "username": "alice", "password": "short", "restaurant_id": alpha }), "invalid password"),
        (json!({ "username": "alice", "password": PASSWORD, "restaurant_id": 0 }), "invalid restaurant id"),
        (json!({ "username": "alice", "password": PASSWORD, "restaurant_id": 999 }), "restaurant not found"),
    ];

    for (payload, message) in cases {
        let (status, body) = app.post("/signup", None, payload).await;

        assert_that!(status, eq(StatusCode::BAD_REQUEST));
        assert_eq!(body["error"], message);
    }
}

#[tokio::test]
async fn given_non_json_body_when_signing_up_then_invalid_payload() {
    let app = TestApp::new().await;
    let request = http::Request::builder()
        .method("POST")
        .uri("/signup")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(body, json!({ "error": "invalid JSON payload" }));
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_unauthorized() {
    let app = TestApp::new().await;
    let alpha = app.restaurant("Alpha").await;
    app.sign_up("alice", alpha).await;

    let (status, body) = app
        .post(
            "/login",
            None,
            json!({ "username": "alice", "password": "wrong-password" }),
        )
        .await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_eq!(body["error"], "invalid username or password");
}

#[tokio::test]
async fn given_valid_login_when_fetching_profile_then_restaurant_name_included() {
    let app = TestApp::new().await;
    let alpha = app.restaurant("Alpha").await;
    let id = app.sign_up("alice", alpha).await;
    let token = app.login("alice").await;

    let (status, body) = app.get("/profile", Some(&token)).await;

    assert_that!(status, eq(StatusCode::OK));
    assert_eq!(body["id"], id);
    assert_eq!(body["user_name"], "alice");
    assert_eq!(body["restaurant_id"], alpha);
    assert_eq!(body["restaurant_name"], "Alpha");
    assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn given_no_token_when_fetching_profile_then_unauthorized() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/profile", None).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_eq!(body["error"], "missing or invalid authorization header");
}

#[tokio::test]
async fn given_running_app_when_probed_then_health_endpoints_respond() {
    let app = TestApp::new().await;

    let (health, body) = app.get("/health", None).await;
    let (live, _) = app.get("/live", None).await;
    let (ready, _) = app.get("/ready", None).await;

    assert_that!(health, eq(StatusCode::OK));
    assert_eq!(body["components"]["database"], "operational");
    assert_that!(live, eq(StatusCode::OK));
    assert_that!(ready, eq(StatusCode::OK));
}
