//! Job implementations.

pub mod retention;

pub use retention::{OverlapGuard, RetentionJob};
