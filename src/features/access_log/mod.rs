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
use model::{AccessEntry, AccessEntryDraft, JsonAccessEntry};

pub fn access_log_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_access_log_handler).post(create_access_entry_handler),
    )
}

async fn create_access_entry_handler(
    State(state): State<AppState>,
    Json(draft): Json<AccessEntryDraft>,
) -> Response {
    match state.repo.create_access_entry(&draft).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(entry_to_json(&entry, "%Y-%m-%d %H:%M:%S")),
        )
            .into_response(),
        Err(e) => storage_error(e),
    }
}

async fn list_access_log_handler(State(state): State<AppState>) -> Response {
    match state.repo.get_all_access_entries().await {
        Ok(entries) => {
            let json_entries: Vec<JsonAccessEntry> = entries
                .iter()
                .map(|e| entry_to_json(e, "%Y-%m-%d %H:%M:%S"))
                .collect();

            Json(json_entries).into_response()
        }
        Err(e) => storage_error(e),
    }
}

pub(crate) fn entry_to_json(entry: &AccessEntry, format: &str) -> JsonAccessEntry {
    let created_at = entry.created_at.map(|val| val.format(format).to_string());

    JsonAccessEntry {
        log_id: entry.log_id,
        user_id: entry.user_id,
        action: entry.action.to_owned(),
        created_at,
    }
}
