use sea_orm::DatabaseConnection;

use crate::{
    model::post::PostPayloadDto,
    server::{
        data::post::PostRepository,
        error::AppError,
        model::{
            page::Page,
            post::{Post, PostParams},
        },
        service::clean_optional,
        util::slug::resolve_slug,
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published posts, most recently published first
    pub async fn get_published(&self, page: u64, per_page: u64) -> Result<Page<Post>, AppError> {
        self.get_page(true, page, per_page).await
    }

    /// Every post including drafts, for the admin panel
    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<Page<Post>, AppError> {
        self.get_page(false, page, per_page).await
    }

    /// Gets a published post by slug; drafts are reported as missing
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_published_by_slug(slug)
            .await?
            .map(Post::from_entity)
            .ok_or_else(|| AppError::not_found("Запись не найдена"))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Post::from_entity)
            .ok_or_else(|| AppError::not_found("Запись не найдена"))
    }

    pub async fn create(&self, author_id: i32, payload: PostPayloadDto) -> Result<Post, AppError> {
        let params = self.validate(None, payload).await?;

        let created = PostRepository::new(self.db)
            .create(params, Some(author_id))
            .await?;

        tracing::info!("User {} created post {} ({})", author_id, created.id, created.slug);

        Ok(Post::from_entity(created))
    }

    /// Overwrites a post. `published_at` is stamped the first time it is published
    pub async fn update(&self, id: i32, payload: PostPayloadDto) -> Result<Post, AppError> {
        let params = self.validate(Some(id), payload).await?;

        PostRepository::new(self.db)
            .update(id, params)
            .await?
            .map(Post::from_entity)
            .ok_or_else(|| AppError::not_found("Запись не найдена"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Запись не найдена"));
        }

        Ok(())
    }

    async fn get_page(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, AppError> {
        let (posts, total) = PostRepository::new(self.db)
            .get_paginated(published_only, page, per_page)
            .await?;

        Ok(Page::new(posts, total, page, per_page).map(Post::from_entity))
    }

    async fn validate(&self, id: Option<i32>, payload: PostPayloadDto) -> Result<PostParams, AppError> {
        let title = payload.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request("Укажите заголовок записи"));
        }
        if payload.content.trim().is_empty() {
            return Err(AppError::bad_request("Добавьте текст записи"));
        }

        let slug = resolve_slug(payload.slug.as_deref(), &title);
        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Не удалось сформировать slug, укажите его вручную",
            ));
        }
        if PostRepository::new(self.db).slug_taken(&slug, id).await? {
            return Err(AppError::conflict("Запись с таким slug уже существует"));
        }

        Ok(PostParams {
            title,
            slug,
            excerpt: clean_optional(payload.excerpt),
            content: payload.content,
            cover_url: clean_optional(payload.cover_url),
            is_published: payload.is_published,
        })
    }
}
