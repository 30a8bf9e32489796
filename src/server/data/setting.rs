use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
};

/// Repository for the key/value settings table.
pub struct SettingRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every setting as a sorted map
    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, DbErr> {
        let settings = entity::prelude::Setting::find().all(self.db).await?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let setting = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(setting.map(|s| s.value))
    }

    /// Inserts or overwrites each given key
    pub async fn upsert_many(&self, values: BTreeMap<String, String>) -> Result<(), DbErr> {
        let now = Utc::now();

        for (key, value) in values {
            entity::prelude::Setting::insert(entity::setting::ActiveModel {
                key: ActiveValue::Set(key),
                value: ActiveValue::Set(value),
                updated_at: ActiveValue::Set(now),
            })
            .on_conflict(
                OnConflict::column(entity::setting::Column::Key)
                    .update_columns([
                        entity::setting::Column::Value,
                        entity::setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        }

        Ok(())
    }
}
