//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::RegisterDto,
        user::{UserDto, UserRole},
    },
    server::error::internal::InternalError,
};

/// Registered account, customer or admin.
///
/// Carries the password hash so authentication can verify credentials; the hash
/// never leaves the server since `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(InternalError::UnknownVariant)` - Stored role is not a known `UserRole`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        let role = entity
            .role
            .parse::<UserRole>()
            .map_err(|value| InternalError::UnknownVariant {
                kind: "user role",
                value,
            })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            name: entity.name,
            phone: entity.phone,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Raw registration input, validated and normalised by the auth service.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            phone: dto.phone,
        }
    }
}
