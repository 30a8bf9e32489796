//! User service for business logic.
//!
//! This module provides the `UserService` used by the admin panel to browse
//! accounts and change roles.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{page::Page, user::User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No such user
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Retrieves users newest first, optionally filtered by an email or name fragment.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<User>, AppError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let (users, total) = UserRepository::new(self.db)
            .get_paginated(search, page, per_page)
            .await?;

        Ok(Page::new(users, total, page, per_page).try_map(User::from_entity)?)
    }

    /// Changes a user's role.
    ///
    /// Admins cannot demote themselves, which guarantees the acting admin is
    /// never locked out by their own request.
    ///
    /// # Arguments
    /// - `actor` - The admin performing the change
    /// - `user_id` - Target account
    /// - `role` - New role
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Admin tried to demote themselves
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn set_role(
        &self,
        actor: &User,
        user_id: i32,
        role: UserRole,
    ) -> Result<User, AppError> {
        if actor.id == user_id && role != UserRole::Admin {
            return Err(AppError::bad_request(
                "Нельзя снять права администратора с самого себя",
            ));
        }

        let updated = UserRepository::new(self.db)
            .set_role(user_id, role)
            .await?
            .ok_or_else(|| AppError::not_found("Пользователь не найден"))?;

        tracing::info!("User {} set role of user {} to {}", actor.id, user_id, role);

        Ok(User::from_entity(updated)?)
    }
}
