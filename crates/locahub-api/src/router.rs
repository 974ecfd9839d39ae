use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{delete, get, patch};
use locahub_core::config::CorsConfig;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers::{health, message, notification, ws};
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Assembles the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.server.cors);

    Router::new()
        .route("/health", get(health::health))
        .route("/ws", get(ws::upgrade))
        .route(
            "/notifications",
            get(notification::list).post(notification::create),
        )
        .route(
            "/notifications/unread-count",
            get(notification::unread_count),
        )
        .route("/notifications/{id}/read", patch(notification::mark_read))
        .route("/notifications/read-all", patch(notification::mark_all_read))
        .route("/messages", get(message::list).post(message::send))
        .route("/messages/read", patch(message::mark_read))
        .route("/messages/{id}", delete(message::delete))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn build_cors(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| match m.parse::<Method>() {
            Ok(method) => Some(method),
            Err(_) => {
                warn!(method = %m, "ignoring invalid CORS method");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
