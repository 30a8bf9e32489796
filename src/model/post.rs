use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PostSummaryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PostDto {
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

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct PostPayloadDto {
    pub title: String,
    /// Generated from the title when omitted.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}
