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
use model::WeaponDraft;
use serde_json::json;

pub fn weapons_router() -> Router<AppState> {
    Router::new().route("/", get(list_weapons_handler).post(create_weapon_handler))
}

async fn create_weapon_handler(
    State(state): State<AppState>,
    Json(draft): Json<WeaponDraft>,
) -> Response {
    // validate that weapon_rfid is provided
    let weapon_rfid = match draft.weapon_rfid.as_deref() {
        Some(rfid) if !rfid.is_empty() => rfid,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "weapon_rfid is required" })),
            )
                .into_response();
        }
    };

    // check if the referenced user exists
    // an absent user_id can never match a row, so it skips the lookup
    let lookup = match draft.user_id {
        Some(user_id) => state.repo.get_user_by_id(user_id).await,
        None => Ok(None),
    };

    let user = match lookup {
        Ok(user) => user,
        Err(e) => return storage_error(e),
    };

    let Some(user) = user else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "User not found" })),
        )
            .into_response();
    };

    // insert weapon
    // no transaction spans the check above and this insert
    match state.repo.create_weapon(user.user_id, weapon_rfid).await {
        Ok(weapon) => (StatusCode::CREATED, Json(weapon)).into_response(),
        Err(e) => storage_error(e),
    }
}

async fn list_weapons_handler(State(state): State<AppState>) -> Response {
    match state.repo.get_all_weapons().await {
        Ok(weapons) => Json(weapons).into_response(),
        Err(e) => storage_error(e),
    }
}
