//! LocaHub notification server — entry point.
//!
//! Wires configuration, database, services, the realtime hub, the retention
//! scheduler, and the HTTP router together, then serves until shutdown.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use locahub_api::auth::TokenVerifier;
use locahub_api::{AppState, build_router};
use locahub_core::config::{AppConfig, LoggingConfig};
use locahub_core::error::AppError;
use locahub_database::connection;
use locahub_database::repositories::message::MessageRepository;
use locahub_database::repositories::notification::NotificationRepository;
use locahub_database::repositories::property::PropertyRepository;
use locahub_database::repositories::user::UserRepository;
use locahub_realtime::hub::RealtimeHub;
use locahub_service::message::MessageService;
use locahub_service::notification::NotificationService;
use locahub_worker::scheduler::CronScheduler;

#[tokio::main]
async fn main() {
    let env = std::env::var("LOCAHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(environment = %env, "Starting LocaHub notification server");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let config = Arc::new(config);

    let pool = connection::connect(&config.database).await?;
    connection::run_migrations(&pool).await?;

    let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));
    let message_repo = Arc::new(MessageRepository::new(pool.clone()));
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let property_repo = Arc::new(PropertyRepository::new(pool.clone()));

    let hub = Arc::new(RealtimeHub::new(config.realtime.clone()));
    let notifications = Arc::new(NotificationService::new(notification_repo));
    let messages = Arc::new(MessageService::new(
        message_repo,
        user_repo,
        property_repo,
        Arc::clone(&notifications),
        Arc::clone(&hub),
    ));

    let mut scheduler = CronScheduler::new().await?;
    scheduler
        .register_retention_purge(Arc::clone(&messages), &config.retention)
        .await?;
    scheduler.start().await?;

    let state = AppState {
        config: Arc::clone(&config),
        db_pool: pool.clone(),
        verifier: Arc::new(TokenVerifier::new(&config.auth)),
        hub,
        notifications,
        messages,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!(%addr, "LocaHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    scheduler.shutdown().await?;
    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
