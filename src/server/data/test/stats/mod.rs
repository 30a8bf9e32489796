use crate::server::data::stats::StatsRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod revenue;
