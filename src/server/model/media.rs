//! Media library domain model.

use chrono::{DateTime, Utc};

use crate::model::media::MediaDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: i32,
    /// Name on disk, `<uuid>.<ext>`.
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploaded_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn from_entity(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            file_name: entity.file_name,
            original_name: entity.original_name,
            mime_type: entity.mime_type,
            size: entity.size,
            url: entity.url,
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            id: self.id,
            file_name: self.file_name,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            url: self.url,
            uploaded_by: self.uploaded_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMediaParams {
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploaded_by: Option<i32>,
}
