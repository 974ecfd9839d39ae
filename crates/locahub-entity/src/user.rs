//! User lookup summary.
//!
//! Account management lives in the account platform; this server only reads
//! the columns needed to resolve message counterparts and notification
//! recipients.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Display info for a user, resolved from the users table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}
