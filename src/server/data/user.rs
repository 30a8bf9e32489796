//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration inserts, lookups by id and email, role changes and the
//! paginated admin listing.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::{data::contains_ignore_case, model::user::CreateUserParams},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Normalised email, password hash, name, phone and role
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email. The caller passes the normalised (lowercase) address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether the bootstrap admin account must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets a page of users, newest first, optionally filtered by a substring of
    /// email or name.
    ///
    /// # Arguments
    /// - `search` - Optional substring matched against email and name
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and total matching users
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(contains_ignore_case(entity::user::Column::Email, search))
                    .add(contains_ignore_case(entity::user::Column::Name, search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(
        &self,
        id: i32,
        role: UserRole,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }
}
