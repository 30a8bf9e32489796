//! Category factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    parent_id: Option<i32>,
    sort_order: i32,
}

impl<'a> CategoryFactory<'a> {
    /// Defaults: name `"Category {id}"`, slug `"category-{id}"`, no parent.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            slug: format!("category-{}", id),
            parent_id: None,
            sort_order: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            parent_id: ActiveValue::Set(self.parent_id),
            image_url: ActiveValue::Set(None),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
