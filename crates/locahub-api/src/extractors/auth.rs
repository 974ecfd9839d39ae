use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::Utc;
use locahub_core::error::AppError;
use locahub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller, extracted from the `Authorization: Bearer`
/// header. Rejects with 401 when the header is missing or the token
/// fails verification.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("malformed authorization header"))?;

        let claims = state.verifier.verify(token)?;

        Ok(Self(RequestContext {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            request_time: Utc::now(),
        }))
    }
}
