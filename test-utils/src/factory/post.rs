//! Blog post factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    published_at: Option<DateTime<Utc>>,
}

impl<'a> PostFactory<'a> {
    /// Defaults to an unpublished draft titled `"Post {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            published_at: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Marks the post as published at the given instant.
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            excerpt: ActiveValue::Set(None),
            content: ActiveValue::Set("Lorem ipsum".to_string()),
            cover_url: ActiveValue::Set(None),
            is_published: ActiveValue::Set(self.published_at.is_some()),
            published_at: ActiveValue::Set(self.published_at),
            author_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_post(db: &DatabaseConnection) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db).build().await
}
