//! Authentication service.
//!
//! Handles registration, password login, refresh-token rotation and logout.
//! A successful authentication yields an [`IssuedSession`]: a signed access
//! token returned in the response body and an opaque refresh token the
//! controller stores in an httpOnly cookie. Only the SHA-256 hash of a
//! refresh token is persisted.

pub mod password;
pub mod token;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{auth::MIN_PASSWORD_LENGTH, user::UserRole},
    server::{
        data::{refresh_token::RefreshTokenRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, RegisterParams, User},
        util::{
            email::{is_valid_email, normalize_email},
            token::{generate_refresh_token, hash_token},
        },
    },
};

use self::{
    password::{hash_password, verify_password},
    token::TokenIssuer,
};

/// Tokens handed out after a successful login, registration or refresh.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: User,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Plaintext refresh token, only ever sent to the client.
    pub refresh_token: String,
    pub refresh_expires_at: DateTime<Utc>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenIssuer) -> Self {
        Self { db, tokens }
    }

    /// Creates a customer account and signs it in.
    ///
    /// The email is trimmed and lowercased before the uniqueness check.
    ///
    /// # Returns
    /// - `Ok(IssuedSession)` - Account created, tokens issued
    /// - `Err(AppError::BadRequest)` - Invalid email, short password or empty name
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<IssuedSession, AppError> {
        let email = normalize_email(&params.email);
        if !is_valid_email(&email) {
            return Err(AppError::bad_request("Некорректный email"));
        }
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(format!(
                "Пароль должен содержать не менее {} символов",
                MIN_PASSWORD_LENGTH
            )));
        }
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request("Укажите имя"));
        }
        let phone = params
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = hash_password(&params.password)?;
        let created = user_repo
            .create(CreateUserParams {
                email,
                password_hash,
                name,
                phone,
                role: UserRole::Customer,
            })
            .await?;
        let user = User::from_entity(created)?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        self.issue_session(user).await
    }

    /// Verifies email and password and signs the user in.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        let email = normalize_email(email);
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials(email).into());
        };
        let user = User::from_entity(entity)?;

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!("Failed login attempt for user {}", user.id);
            return Err(AuthError::InvalidCredentials(email).into());
        }

        self.issue_session(user).await
    }

    /// Exchanges a refresh token for a new access token and a new refresh token.
    ///
    /// The presented token is deleted before the replacement is stored, so each
    /// refresh token is single-use even when two requests present it at once.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<IssuedSession, AppError> {
        let refresh_token = refresh_token.ok_or(AuthError::MissingRefreshToken)?;
        let token_hash = hash_token(refresh_token);
        let token_repo = RefreshTokenRepository::new(self.db);

        let stored = token_repo
            .find_valid(&token_hash, Utc::now())
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        // Only the request whose delete removed the row may mint a new session.
        if !token_repo.delete_by_hash(&token_hash).await? {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let entity = UserRepository::new(self.db)
            .find_by_id(stored.user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(stored.user_id))?;

        self.issue_session(User::from_entity(entity)?).await
    }

    /// Revokes the presented refresh token. Succeeds even if it is unknown.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AppError> {
        if let Some(token) = refresh_token {
            RefreshTokenRepository::new(self.db)
                .delete_by_hash(&hash_token(token))
                .await?;
        }

        Ok(())
    }

    /// Creates the bootstrap administrator when the database has none.
    ///
    /// An existing account with the configured email is promoted instead of
    /// duplicated. Without configured credentials a warning is logged and
    /// nothing changes.
    pub async fn ensure_admin(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(());
        }

        let (Some(email), Some(password)) = (email, password) else {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup"
            );
            return Ok(());
        };

        let email = normalize_email(email);
        if let Some(existing) = user_repo.find_by_email(&email).await? {
            user_repo.set_role(existing.id, UserRole::Admin).await?;
            tracing::info!("Promoted existing user {} to admin", existing.id);
            return Ok(());
        }

        let created = user_repo
            .create(CreateUserParams {
                email,
                password_hash: hash_password(password)?,
                name: "Администратор".to_string(),
                phone: None,
                role: UserRole::Admin,
            })
            .await?;

        tracing::info!("Created bootstrap admin account {}", created.id);

        Ok(())
    }

    async fn issue_session(&self, user: User) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let access_token = self.tokens.issue_access_token(&user, now)?;

        let refresh_token = generate_refresh_token();
        let refresh_expires_at = now + self.tokens.refresh_ttl();
        RefreshTokenRepository::new(self.db)
            .create(user.id, hash_token(&refresh_token), refresh_expires_at)
            .await?;

        Ok(IssuedSession {
            user,
            access_token,
            expires_in: self.tokens.access_ttl_seconds(),
            refresh_token,
            refresh_expires_at,
        })
    }
}
