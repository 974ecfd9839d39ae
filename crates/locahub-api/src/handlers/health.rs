use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::dto::response::ApiEnvelope;
use crate::state::AppState;

/// `GET /health` — liveness plus a cheap snapshot of the realtime hub.
/// Does not touch the database so it stays useful while the store is down.
pub async fn health(State(state): State<AppState>) -> Json<ApiEnvelope<Value>> {
    Json(ApiEnvelope::success(
        "ok",
        json!({
            "connections": state.hub.connection_count(),
            "onlineUsers": state.hub.online_user_count(),
        }),
    ))
}
