//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use locahub_core::config::retention::RetentionConfig;
use locahub_core::error::AppError;
use locahub_service::MessageService;

use crate::jobs::retention::RetentionJob;

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new() -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self { scheduler })
    }

    /// Register the daily message retention purge.
    pub async fn register_retention_purge(
        &self,
        messages: Arc<MessageService>,
        config: &RetentionConfig,
    ) -> Result<(), AppError> {
        if !config.enabled {
            info!("Retention purge disabled by configuration");
            return Ok(());
        }

        let job = Arc::new(RetentionJob::new(messages, config.message_max_age_days));

        let cron_job = CronJob::new_async(config.schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create retention schedule: {e}")))?;

        self.scheduler
            .add(cron_job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add retention schedule: {e}")))?;

        info!(
            schedule = %config.schedule,
            max_age_days = config.message_max_age_days,
            "Registered: message retention purge"
        );
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }
}
