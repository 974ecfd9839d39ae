//! # locahub-worker
//!
//! Scheduled background tasks for LocaHub. Currently a single job: the daily
//! message retention purge, guarded against overlapping runs.

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
