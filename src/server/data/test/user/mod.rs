use crate::{
    model::user::UserRole,
    server::{data::user::UserRepository, model::user::CreateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_paginated;
mod set_role;
