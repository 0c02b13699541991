//! Signed bearer tokens encoding user identity.
//!
//! Tokens are stateless: verification needs only the signing secret, no
//! server-side session store, and there is no revocation mechanism.

use crate::{error::Error, store::models::UserPublic};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Token lifetime in seconds (2 hours).
pub const TOKEN_EXPIRATION: i64 = 2 * 60 * 60;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    secret: SecretString,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Issue a signed token embedding the user's identity.
    ///
    /// # Errors
    /// Returns an internal error if signing fails.
    pub fn issue(&self, user: &UserPublic) -> Result<String, Error> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + TOKEN_EXPIRATION,
        };

        debug!("Issuing token for user {} ({})", user.username, user.id);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| {
            error!("Failed to sign token: {:?}", e);
            Error::internal("Failed to issue token")
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Malformed, unsigned, and expired tokens all fail the same way.
    ///
    /// # Errors
    /// Returns an unauthenticated error if verification fails.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!("Token verification failed: {:?}", e);
            Error::unauthenticated("Invalid or expired token")
        })
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use uuid::Uuid;

    fn test_user() -> UserPublic {
        UserPublic {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
        }
    }

    fn test_service() -> TokenService {
        TokenService::new(SecretString::from("test-secret-key-12345".to_string()))
    }

    #[test]
    fn test_issue_and_verify() {
        let service = test_service();
        let user = test_user();

        let token = service.issue(&user).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.email, "ada@x.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRATION);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = test_service();

        let result = service.verify("invalid.token.here");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_different_secrets_reject() {
        let service1 = TokenService::new(SecretString::from("secret1".to_string()));
        let service2 = TokenService::new(SecretString::from("secret2".to_string()));

        let token = service1.issue(&test_user()).unwrap();

        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test-secret-key-12345";
        let now = Utc::now().timestamp();

        // Signed with the right key but expired beyond the default leeway
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
            iat: now - TOKEN_EXPIRATION - 3600,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let service = TokenService::new(SecretString::from(secret.to_string()));
        assert_eq!(
            service.verify(&token).unwrap_err().kind(),
            ErrorKind::Unauthenticated
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", test_service());
        assert!(!debug.contains("test-secret-key-12345"));
    }
}
