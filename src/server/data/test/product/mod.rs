use crate::{
    model::product::ProductSort,
    server::{
        data::product::ProductRepository,
        model::product::{ProductFilter, ProductParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod stock;
