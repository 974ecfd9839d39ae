//! Property lookup summary.
//!
//! Listing CRUD lives elsewhere; the send path only needs enough of a listing
//! to title an application notification and build its deep link.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Minimal view of a rental listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertySummary {
    /// Property identifier.
    pub id: Uuid,
    /// Listing title.
    pub title: String,
    /// Owner of the listing.
    pub owner_id: Uuid,
}
