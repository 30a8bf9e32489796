//! Store settings service.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::setting::NUMERIC_SETTING_KEYS,
    server::{data::setting::SettingRepository, error::AppError},
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        Ok(SettingRepository::new(self.db).get_all().await?)
    }

    /// Upserts the given keys and returns the full settings map.
    ///
    /// Keys are trimmed. Amount settings such as `shipping_cost` must be
    /// non-negative integers (kopecks); the whole update is rejected otherwise.
    pub async fn update(
        &self,
        values: BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, AppError> {
        let values = validate(values)?;
        let repo = SettingRepository::new(self.db);

        if !values.is_empty() {
            let keys = values.keys().cloned().collect::<Vec<_>>().join(", ");
            repo.upsert_many(values).await?;
            tracing::info!("Updated settings: {}", keys);
        }

        Ok(repo.get_all().await?)
    }
}

fn validate(values: BTreeMap<String, String>) -> Result<BTreeMap<String, String>, AppError> {
    let mut cleaned = BTreeMap::new();

    for (key, value) in values {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(AppError::bad_request("Ключ настройки не может быть пустым"));
        }

        let value = if NUMERIC_SETTING_KEYS.contains(&key.as_str()) {
            let trimmed = value.trim();
            match trimmed.parse::<i64>() {
                Ok(amount) if amount >= 0 => amount.to_string(),
                _ => {
                    return Err(AppError::bad_request(format!(
                        "Значение настройки {} должно быть неотрицательным целым числом",
                        key
                    )));
                }
            }
        } else {
            value
        };

        cleaned.insert(key, value);
    }

    Ok(cleaned)
}
