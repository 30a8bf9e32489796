use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::post::PostParams;

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post. `published_at` is set when it is created already published.
    pub async fn create(
        &self,
        params: PostParams,
        author_id: Option<i32>,
    ) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();

        entity::post::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            excerpt: ActiveValue::Set(params.excerpt),
            content: ActiveValue::Set(params.content),
            cover_url: ActiveValue::Set(params.cover_url),
            is_published: ActiveValue::Set(params.is_published),
            published_at: ActiveValue::Set(params.is_published.then_some(now)),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a post. `published_at` is only set on the first publish and kept afterwards.
    pub async fn update(
        &self,
        id: i32,
        params: PostParams,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        let Some(post) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let published_at: Option<DateTime<Utc>> = match post.published_at {
            Some(first) => Some(first),
            None => params.is_published.then_some(now),
        };

        let mut active_model: entity::post::ActiveModel = post.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.slug = ActiveValue::Set(params.slug);
        active_model.excerpt = ActiveValue::Set(params.excerpt);
        active_model.content = ActiveValue::Set(params.content);
        active_model.cover_url = ActiveValue::Set(params.cover_url);
        active_model.is_published = ActiveValue::Set(params.is_published);
        active_model.published_at = ActiveValue::Set(published_at);
        active_model.updated_at = ActiveValue::Set(now);

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::post::Model>, DbErr> {
        entity::prelude::Post::find_by_id(id).one(self.db).await
    }

    /// Finds a published post by slug; drafts are invisible here
    pub async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::post::Model>, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .filter(entity::post::Column::IsPublished.eq(true))
            .one(self.db)
            .await
    }

    /// Gets a page of posts. Published-only listings are ordered by publish date,
    /// admin listings by last edit.
    pub async fn get_paginated(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::post::Model>, u64), DbErr> {
        let query = if published_only {
            entity::prelude::Post::find()
                .filter(entity::post::Column::IsPublished.eq(true))
                .order_by_desc(entity::post::Column::PublishedAt)
        } else {
            entity::prelude::Post::find().order_by_desc(entity::post::Column::UpdatedAt)
        };

        let paginator = query
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let posts = paginator.fetch_page(page).await?;

        Ok((posts, total))
    }

    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Post::find().filter(entity::post::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::post::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
