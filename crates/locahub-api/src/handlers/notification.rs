use axum::Json;
use axum::extract::{Path, Query, State};
use locahub_core::error::AppError;
use locahub_database::repositories::notification::NewNotification;
use locahub_entity::notification::{Notification, NotificationKind};
use locahub_service::push;
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::dto::request::{CreateNotificationRequest, MarkAllReadQuery};
use crate::dto::response::ApiEnvelope;
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// `GET /notifications` — full list for the caller, newest first, plus the
/// unread count for the badge. Serves both initial load and the
/// reconciliation poll.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let notifications = state.notifications.list(ctx.user_id).await?;
    let unread = state.notifications.unread_count(ctx.user_id).await?;
    Ok(Json(ApiEnvelope::success(
        "notifications retrieved",
        json!({
            "notifications": notifications,
            "unreadCount": unread,
        }),
    )))
}

/// `POST /notifications` — record a notification for any user and push it
/// to their room if they are online. Persistence failures abort the
/// request; a silent room is a no-op.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(_ctx): AuthUser,
    ApiJson(body): ApiJson<CreateNotificationRequest>,
) -> Result<Json<ApiEnvelope<Notification>>, ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let kind = body
        .kind
        .as_deref()
        .map(NotificationKind::coerce)
        .unwrap_or(NotificationKind::System);

    let notification = state
        .notifications
        .create(NewNotification {
            user_id: body.user_id,
            kind,
            title: body.title,
            body: body.message,
            link: body.link,
        })
        .await?;

    push::push_notification(&state.hub, &notification);

    Ok(Json(ApiEnvelope::success(
        "notification created",
        notification,
    )))
}

/// `PATCH /notifications/{id}/read` — mark one notification read.
/// Ownership is enforced in the store; someone else's id reads as 404.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    state.notifications.mark_read(id, ctx.user_id).await?;
    Ok(Json(ApiEnvelope::success_empty("notification marked read")))
}

/// `PATCH /notifications/read-all` — mark every unread notification read,
/// optionally restricted to one kind via `?kind=`. Idempotent.
pub async fn mark_all_read(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
    Query(query): Query<MarkAllReadQuery>,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let kind = query.kind.as_deref().map(NotificationKind::coerce);
    let updated = state.notifications.mark_all_read(ctx.user_id, kind).await?;
    Ok(Json(ApiEnvelope::success(
        "notifications marked read",
        json!({ "updated": updated }),
    )))
}

/// `GET /notifications/unread-count` — badge count only, cheaper than the
/// full list for frequent polls.
pub async fn unread_count(
    State(state): State<AppState>,
    AuthUser(ctx): AuthUser,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let unread = state.notifications.unread_count(ctx.user_id).await?;
    Ok(Json(ApiEnvelope::success(
        "unread count retrieved",
        json!({ "unreadCount": unread }),
    )))
}
