//! Blog post domain model.

use chrono::{DateTime, Utc};

use crate::model::post::{PostDto, PostSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            content: entity.content,
            cover_url: entity.cover_url,
            is_published: entity.is_published,
            published_at: entity.published_at,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            cover_url: self.cover_url,
            is_published: self.is_published,
            published_at: self.published_at,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> PostSummaryDto {
        PostSummaryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            cover_url: self.cover_url,
            is_published: self.is_published,
            published_at: self.published_at,
        }
    }
}

/// Validated post fields. `slug` is final.
#[derive(Debug, Clone)]
pub struct PostParams {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_url: Option<String>,
    pub is_published: bool,
}
