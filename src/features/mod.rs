pub mod access_log;
pub mod users;
pub mod weapons;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

// every storage failure collapses into the same opaque response, the
// underlying error only ever reaches the server log
pub fn storage_error(err: anyhow::Error) -> Response {
    eprintln!("Storage error: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
