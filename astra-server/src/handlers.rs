use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;

use astra_core::Error;

use crate::state::AppState;

const DEFAULT_SESSION: &str = "default";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ClearRequest {
    pub session: Option<String>,
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::Upstream(_) | Error::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let session = payload.session.unwrap_or_else(|| DEFAULT_SESSION.to_string());

    match state.chat.handle_turn(&session, &payload.message).await {
        Ok(response) => (StatusCode::OK, Json(json!({ "response": response }))),
        Err(e) => {
            tracing::error!(%session, "chat turn failed: {}", e);
            (status_for(&e), Json(json!({ "error": e.to_string() })))
        }
    }
}

pub async fn clear_handler(
    State(state): State<AppState>,
    payload: Option<Json<ClearRequest>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let session = payload
        .and_then(|Json(p)| p.session)
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    state.chat.clear(&session);
    (StatusCode::OK, Json(json!({ "status": "success" })))
}

pub async fn status_handler() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "running" })))
}
