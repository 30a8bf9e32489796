use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const TOKEN_TYPE: &str = "Bearer";

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Body returned by register and login. The refresh token travels in a cookie.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub access_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
