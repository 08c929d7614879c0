use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use wealthnest_core::users::UserServiceTrait;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState, models::UserResponse};

async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users()?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/me", get(me))
        .route("/users", get(list_users))
}
