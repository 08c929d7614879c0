use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use wealthnest_core::users::UserServiceTrait;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse},
};

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.register(payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)?;
    let token = state
        .auth
        .issue_token(&user.email)
        .map_err(|e| ApiError::Internal(format!("{e:?}")))?;
    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        expires_in: state.auth.expires_in().as_secs(),
    }))
}

/// Tokens are stateless; the client drops its copy.
async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logged out (client should clear token)"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}
