use crate::server::data::category::CategoryRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_active_products;
mod delete;
mod get_all;
