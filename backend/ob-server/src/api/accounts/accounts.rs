//! Account REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedPrincipal, LoginRequest, LoginResponse,
    ProfileResponse, SignUpRequest, SignUpResponse,
};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SignUpResponse>)> {
    let Json(request) = payload?;

    let user = state
        .users
        .sign_up(&request.username, &request.password, request.restaurant_id)
        .await
        .map_err(|e| ApiError::from(e).not_found_as_bad_request())?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let access_token = state
        .users
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse { access_token }))
}

/// GET /profile
pub async fn profile(
    AuthenticatedPrincipal(principal): AuthenticatedPrincipal,
    State(state): State<AppState>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.users.profile(principal.id).await?;

    Ok(Json(profile.into()))
}
