use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// MIME types accepted by the media library.
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/svg+xml",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MediaDto {
    pub id: i32,
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploaded_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}
