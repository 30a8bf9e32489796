use crate::server::data::coupon::CouponRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_code;
mod usage;
