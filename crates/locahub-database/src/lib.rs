//! # locahub-database
//!
//! PostgreSQL access layer for LocaHub: pool setup, embedded migrations, and
//! the repositories backing the notification and message stores.

pub mod connection;
pub mod repositories;
