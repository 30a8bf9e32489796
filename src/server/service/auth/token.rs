//! Access token signing and verification.
//!
//! Access tokens are HS256 JWTs carrying the user id and role. They are
//! short-lived; long-lived sessions are kept alive by opaque refresh tokens
//! stored hashed in the database.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::User};

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// User id as a decimal string.
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl AccessClaims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("non-numeric subject '{}'", self.sub)))
    }
}

/// Signing keys and lifetimes for both token kinds.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Access token lifetime in seconds, reported to clients as `expires_in`.
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Signs an access token for `user` valid from `now`.
    pub fn issue_access_token(&self, user: &User, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = AccessClaims {
            sub: user.id.to_string(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry of an access token.
    ///
    /// # Returns
    /// - `Ok(AccessClaims)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Signature is fine but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Anything else is wrong with it
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        decode::<AccessClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserRole;

    fn issuer(secret: &str) -> TokenIssuer {
        TokenIssuer::new(secret, Duration::minutes(15), Duration::days(30))
    }

    fn user() -> User {
        User {
            id: 7,
            email: "anna@example.ru".to_string(),
            password_hash: String::new(),
            name: "Анна".to_string(),
            phone: None,
            role: UserRole::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let issuer = issuer("secret");
        let token = issuer.issue_access_token(&user(), Utc::now()).unwrap();

        let claims = issuer.verify_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let issuer = issuer("secret");
        let issued_at = Utc::now() - Duration::hours(2);
        let token = issuer.issue_access_token(&user(), issued_at).unwrap();

        let result = issuer.verify_access_token(&token);

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let token = issuer("one")
            .issue_access_token(&user(), Utc::now())
            .unwrap();

        let result = issuer("two").verify_access_token(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn garbage_is_invalid() {
        let result = issuer("secret").verify_access_token("not.a.jwt");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
