use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenIssuer,
};

pub enum Permission {
    Admin,
}

/// Resolves the `Authorization: Bearer <token>` header to a user.
///
/// The user is reloaded from the database on every request, so role changes
/// and deleted accounts take effect before the access token expires.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenIssuer,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify_access_token(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin endpoint without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
