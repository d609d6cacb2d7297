use crate::ApiError;

use ob_auth::AuthError;
use ob_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_flat_error_body() {
    let (status, json) = render(ApiError::NotFound {
        message: "restaurant not found".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "restaurant not found" }));
}

#[tokio::test]
async fn given_timeout_when_rendered_then_408() {
    let (status, json) = render(ApiError::Timeout { location: here() }).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["error"], "request timed out");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_cause_is_not_exposed() {
    let error = ApiError::from(ServiceError::Database {
        source: ob_db::DbError::Initialization {
            message: "disk on fire".into(),
            location: here(),
        },
        location: here(),
    });

    assert_that!(error.to_string(), contains_substring("disk on fire"));
    assert_that!(error.message(), eq("internal server error"));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal server error");
}

#[test]
fn given_credential_lookup_failure_when_converted_then_cause_stays_out_of_message() {
    let error = ApiError::from(AuthError::CredentialLookup {
        message: "pool timed out".into(),
        location: here(),
    });

    assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(error.to_string(), contains_substring("pool timed out"));
    assert_that!(error.message(), eq("internal server error"));
}

#[test]
fn given_auth_failures_when_converted_then_expired_and_invalid_stay_distinct() {
    let cases = [
        (
            AuthError::MissingOrMalformedCredential { location: here() },
            StatusCode::UNAUTHORIZED,
            "missing or invalid authorization header",
        ),
        (
            AuthError::InvalidToken {
                reason: "bad signature".into(),
                location: here(),
            },
            StatusCode::UNAUTHORIZED,
            "invalid token",
        ),
        (
            AuthError::TokenExpired { location: here() },
            StatusCode::UNAUTHORIZED,
            "token expired",
        ),
        (
            AuthError::Forbidden {
                principal_tenant: 1,
                resource_tenant: 2,
                location: here(),
            },
            StatusCode::FORBIDDEN,
            "order data does not belong to your restaurant",
        ),
    ];

    for (auth_error, status, message) in cases {
        let api_error = ApiError::from(auth_error);
        assert_that!(api_error.status(), eq(status));
        assert_that!(api_error.message(), eq(message));
    }
}

#[test]
fn given_service_failures_when_converted_then_status_follows_kind() {
    let cases = [
        (
            ServiceError::InvalidTenant {
                tenant_id: 0,
                location: here(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ServiceError::TenantNotFound {
                tenant_id: 9,
                location: here(),
            },
            StatusCode::NOT_FOUND,
        ),
        (
            ServiceError::UsernameTaken {
                username: "alice".into(),
                location: here(),
            },
            StatusCode::CONFLICT,
        ),
        (
            ServiceError::InvalidCredentials { location: here() },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ServiceError::UserNotFound {
                user_id: 3,
                location: here(),
            },
            StatusCode::UNAUTHORIZED,
        ),
        (
            ServiceError::Forbidden {
                order_id: 1,
                tenant_id: 2,
                location: here(),
            },
            StatusCode::FORBIDDEN,
        ),
    ];

    for (service_error, status) in cases {
        assert_that!(ApiError::from(service_error).status(), eq(status));
    }
}

#[test]
fn given_not_found_on_write_endpoint_when_downgraded_then_bad_request_keeps_message() {
    let error = ApiError::from(ServiceError::IngredientNotFound {
        ingredient_id: 4,
        location: here(),
    })
    .not_found_as_bad_request();

    assert_that!(error.status(), eq(StatusCode::BAD_REQUEST));
    assert_that!(error.message(), eq("ingredient not found"));
}
