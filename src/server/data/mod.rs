//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work on SeaORM entity models and return them
//! (or small tuples of them) to the service layer, which converts them to domain models.
//! Repositories whose operations take part in checkout are generic over `ConnectionTrait`
//! so the same code runs on a pooled connection or inside a transaction.

use sea_orm::{
    sea_query::{BinOper, Expr, ExprTrait, Func},
    ColumnTrait,
};

pub mod banner;
pub mod cart;
pub mod category;
pub mod coupon;
pub mod media;
pub mod order;
pub mod post;
pub mod product;
pub mod refresh_token;
pub mod review;
pub mod setting;
pub mod stats;
pub mod user;

/// `LOWER(column) LIKE LOWER('%needle%')`, used by the search filters.
///
/// Plain `LIKE` is case-sensitive on PostgreSQL but not on SQLite, so both sides
/// are lowered to give the same matches on either backend.
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, needle: &str) -> Expr {
    Func::lower(Expr::col(column.as_column_ref())).binary(
        BinOper::Like,
        Func::lower(Expr::val(format!("%{needle}%"))),
    )
}

#[cfg(test)]
mod test;

#[cfg(test)]
mod search_tests {
    use sea_orm::sea_query::{PostgresQueryBuilder, Query};

    use super::*;

    /// Postgres gets lowered operands instead of a case-sensitive `LIKE`.
    #[test]
    fn lowers_both_operands() {
        let sql = Query::select()
            .column(entity::product::Column::Id)
            .from(entity::prelude::Product)
            .and_where(contains_ignore_case(entity::product::Column::Name, "Чайник"))
            .to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"LOWER("product"."name") LIKE LOWER("#));
        assert!(sql.contains("%Чайник%"));
    }
}
