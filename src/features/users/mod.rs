pub mod model;

use crate::AppState;
use crate::features::storage_error;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use model::UserDraft;

pub fn users_router() -> Router<AppState> {
    Router::new().route("/", get(list_users_handler).post(create_user_handler))
}

async fn create_user_handler(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Response {
    match state.repo.create_user(&draft).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => storage_error(e),
    }
}

async fn list_users_handler(State(state): State<AppState>) -> Response {
    match state.repo.get_all_users().await {
        Ok(users) => Json(users).into_response(),
        Err(e) => storage_error(e),
    }
}
