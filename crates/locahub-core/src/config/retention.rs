//! Message retention configuration.

use serde::{Deserialize, Serialize};

/// Scheduled message retention purge configuration.
///
/// The threshold unit is days, spelled out in the field name so operators
/// are never left guessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Whether the daily purge job is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Messages older than this many days are deleted by the purge job.
    #[serde(default = "default_max_age_days")]
    pub message_max_age_days: i64,
    /// Cron expression for the purge schedule (seconds-resolution, server-local time).
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            message_max_age_days: default_max_age_days(),
            schedule: default_schedule(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_age_days() -> i64 {
    5
}

fn default_schedule() -> String {
    // Daily at midnight.
    "0 0 0 * * *".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_policy() {
        let cfg = RetentionConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.message_max_age_days, 5);
        assert_eq!(cfg.schedule, "0 0 0 * * *");
    }
}
