//! Setting factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::setting::Model, DbErr> {
    entity::setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
