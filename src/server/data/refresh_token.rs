//! Stored refresh tokens. Only SHA-256 hashes ever reach the database.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new token hash for the user.
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a token by hash that has not expired at `now`.
    pub async fn find_valid(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .filter(entity::refresh_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Deletes a token by hash.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was deleted
    /// - `Ok(false)` - No token with that hash (already rotated or logged out)
    pub async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every token that expired at or before `now`. Returns the number removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
