//! Authentication configuration.
//!
//! Token issuance happens in the account platform; this server only
//! validates bearer tokens, so the shared signing secret is all it needs.

use serde::{Deserialize, Serialize};

/// Authentication middleware configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to validate access tokens.
    pub jwt_secret: String,
    /// Expected token issuer (skipped when empty).
    #[serde(default)]
    pub issuer: String,
}
