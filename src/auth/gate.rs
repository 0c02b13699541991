//! Bearer-token gate for mutating operations.
//!
//! Reads (list/get questions) are public; posting questions and answers goes
//! through `require_auth`, which resolves the `Authorization` header into an
//! `Identity` or fails with an unauthenticated error.

use crate::{auth::token::TokenService, error::Error};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use uuid::Uuid;

/// Decoded identity attached to authenticated requests.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

/// Resolve the bearer token in `headers` into an identity.
///
/// # Errors
/// Returns an unauthenticated error if the header is missing or the token
/// does not verify.
pub fn require_auth(headers: &HeaderMap, tokens: &TokenService) -> Result<Identity, Error> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or_else(|| Error::unauthenticated("Authentication required"))?;

    let claims = tokens.verify(token)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| Error::unauthenticated("Invalid or expired token"))?;

    Ok(Identity {
        user_id,
        username: claims.username,
        email: claims.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, store::models::UserPublic};
    use axum::http::HeaderValue;
    use secrecy::SecretString;

    fn test_service() -> TokenService {
        TokenService::new(SecretString::from("test-secret-key-12345".to_string()))
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let service = test_service();
        let user = UserPublic {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
        };
        let token = service.issue(&user).unwrap();

        let identity = require_auth(&bearer(&token), &service).unwrap();

        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "ada");
        assert_eq!(identity.email, "ada@x.com");
    }

    #[test]
    fn test_missing_header_is_unauthenticated() {
        let err = require_auth(&HeaderMap::new(), &test_service()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert_eq!(err.message(), "Authentication required");
    }

    #[test]
    fn test_non_bearer_header_is_unauthenticated() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));

        let err = require_auth(&headers, &test_service()).unwrap_err();
        assert_eq!(err.message(), "Authentication required");
    }

    #[test]
    fn test_garbage_token_is_unauthenticated() {
        let err = require_auth(&bearer("not.a.token"), &test_service()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert_eq!(err.message(), "Invalid or expired token");
    }
}
