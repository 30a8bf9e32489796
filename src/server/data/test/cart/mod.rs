use crate::server::data::cart::CartRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod lines;
