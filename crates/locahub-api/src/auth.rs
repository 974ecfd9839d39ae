use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use locahub_core::config::AuthConfig;
use locahub_core::error::AppError;
use locahub_core::result::AppResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the platform's access tokens. Issued by the main
/// application; this service only verifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub exp: usize,
}

/// Verifies bearer tokens against the shared HMAC secret.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if !config.issuer.is_empty() {
            validation.set_issuer(&[config.issuer.as_str()]);
        }
        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!(error = %err, "token verification failed");
                AppError::unauthorized("invalid or expired token")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            issuer: String::new(),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims() -> Claims {
        Claims {
            sub: Uuid::new_v4(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn accepts_token_signed_with_shared_secret() {
        let verifier = TokenVerifier::new(&config());
        let claims = claims();
        let token = sign(&claims, "test-secret");
        let verified = verifier.verify(&token).unwrap();
        assert_eq!(verified.sub, claims.sub);
        assert_eq!(verified.email, "alice@example.com");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let verifier = TokenVerifier::new(&config());
        let token = sign(&claims(), "wrong-secret");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let verifier = TokenVerifier::new(&config());
        let mut claims = claims();
        claims.exp = (chrono::Utc::now().timestamp() - 3600) as usize;
        let token = sign(&claims, "test-secret");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        let verifier = TokenVerifier::new(&config());
        assert!(verifier.verify("not.a.token").is_err());
    }
}
