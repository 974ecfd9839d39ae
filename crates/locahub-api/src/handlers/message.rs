use axum::Json;
use axum::extract::{Path, State};
use locahub_core::error::AppError;
use locahub_entity::message::{Message, MessageWithCounterpart};
use locahub_service::message::SendMessage;
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::dto::request::{MarkMessagesReadRequest, SendMessageRequest};
use crate::dto::response::ApiEnvelope;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// `GET /messages` — every message the caller sent or received, newest
/// first, each joined with the counterpart's name and email.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiEnvelope<Vec<MessageWithCounterpart>>>, ApiError> {
    let messages = state.messages.list(ctx.user_id).await?;
    Ok(Json(ApiEnvelope::success("messages retrieved", messages)))
}

/// `POST /messages` — persist a message, then best-effort notify and push
/// to the receiver. The response reflects persistence only.
pub async fn send(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ApiJson(body): ApiJson<SendMessageRequest>,
) -> Result<Json<ApiEnvelope<Message>>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let message = state
        .messages
        .send(
            &ctx,
            SendMessage {
                receiver_id: body.receiver_id,
                body: body.message,
                property_id: body.property_id,
            },
        )
        .await?;

    Ok(Json(ApiEnvelope::success("message sent", message)))
}

/// `PATCH /messages/read` — bulk mark as read. Only rows where the caller
/// is the receiver are touched; foreign ids in the batch are skipped.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    ApiJson(body): ApiJson<MarkMessagesReadRequest>,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = state
        .messages
        .mark_read(&body.message_ids, ctx.user_id)
        .await?;
    Ok(Json(ApiEnvelope::success(
        "messages marked read",
        json!({ "updated": updated }),
    )))
}

/// `DELETE /messages/{id}` — remove a message the caller participates in.
/// A foreign or missing id reads as 404; existence is never revealed.
pub async fn delete(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    state.messages.delete(id, ctx.user_id).await?;
    Ok(Json(ApiEnvelope::success_empty("message deleted")))
}
