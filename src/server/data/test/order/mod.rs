use crate::{
    model::order::OrderStatus,
    server::{
        data::order::OrderRepository,
        model::order::{NewOrder, NewOrderItem},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update_status;
