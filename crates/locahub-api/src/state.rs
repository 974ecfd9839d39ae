use std::sync::Arc;

use locahub_core::config::AppConfig;
use locahub_realtime::hub::RealtimeHub;
use locahub_service::message::MessageService;
use locahub_service::notification::NotificationService;
use sqlx::PgPool;

use crate::auth::TokenVerifier;

/// Shared application state cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_pool: PgPool,
    pub verifier: Arc<TokenVerifier>,
    pub hub: Arc<RealtimeHub>,
    pub notifications: Arc<NotificationService>,
    pub messages: Arc<MessageService>,
}
