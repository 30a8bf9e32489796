//! Media library: image uploads stored on local disk.

use std::{io::ErrorKind, path::PathBuf};

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::media::ALLOWED_MIME_TYPES,
    server::{
        config::Config,
        data::media::MediaRepository,
        error::AppError,
        model::{
            media::{CreateMediaParams, Media},
            page::Page,
        },
    },
};

/// Where uploads are written and how they are addressed publicly.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    pub dir: PathBuf,
    /// Public URL path the directory is served under, e.g. `/uploads`.
    pub url_prefix: String,
    pub max_bytes: usize,
}

impl MediaStorage {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dir: PathBuf::from(&config.upload_dir),
            url_prefix: config.media_url_prefix.trim_end_matches('/').to_string(),
            max_bytes: config.max_upload_bytes,
        }
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }
}

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a MediaStorage,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Validates and stores an upload, then records it.
    ///
    /// The file is written under a fresh `<uuid>.<ext>` name. If recording it
    /// fails, the written file is removed again.
    ///
    /// # Returns
    /// - `Ok(Media)` - Stored file with its public URL
    /// - `Err(AppError::BadRequest)` - Empty, too large or not an accepted image type
    pub async fn upload(&self, upload: MediaUpload, uploaded_by: i32) -> Result<Media, AppError> {
        if upload.data.is_empty() {
            return Err(AppError::bad_request("Файл пуст"));
        }
        if upload.data.len() > self.storage.max_bytes {
            return Err(AppError::bad_request(format!(
                "Файл слишком большой, максимум {} МБ",
                self.storage.max_bytes / (1024 * 1024)
            )));
        }

        let mime_type = upload
            .mime_type
            .as_deref()
            .map(|m| m.trim().to_lowercase())
            .filter(|m| ALLOWED_MIME_TYPES.contains(&m.as_str()))
            .ok_or_else(|| {
                AppError::bad_request("Допустимы только изображения JPEG, PNG, WebP, GIF и SVG")
            })?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(&mime_type));
        let path = self.storage.dir.join(&file_name);

        tokio::fs::write(&path, &upload.data).await?;

        let params = CreateMediaParams {
            url: self.storage.url_for(&file_name),
            file_name,
            original_name: original_name(upload.original_name),
            mime_type,
            size: upload.data.len() as i64,
            uploaded_by: Some(uploaded_by),
        };

        let created = match MediaRepository::new(self.db).create(params).await {
            Ok(created) => created,
            Err(err) => {
                if let Err(io_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove orphaned upload {:?}: {}", path, io_err);
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            "User {} uploaded {} ({} bytes)",
            uploaded_by,
            created.file_name,
            created.size
        );

        Ok(Media::from_entity(created))
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Media>, AppError> {
        let (media, total) = MediaRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(media, total, page, per_page).map(Media::from_entity))
    }

    /// Deletes the record, then the file. A file already gone from disk is fine.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = MediaRepository::new(self.db);

        let media = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Файл не найден"))?;

        repo.delete(id).await?;

        match tokio::fs::remove_file(self.storage.dir.join(&media.file_name)).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!("Media file {} was already missing", media.file_name);
            }
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/svg+xml" => "svg",
        _ => "bin",
    }
}

/// Keeps only the final path component of a client-supplied file name.
fn original_name(name: Option<String>) -> String {
    name.as_deref()
        .and_then(|n| n.rsplit(['/', '\\']).next())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("file")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_mime_types_to_extensions() {
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/svg+xml"), "svg");
    }

    #[test]
    fn strips_directories_from_original_name() {
        assert_eq!(original_name(Some("../../etc/photo.png".to_string())), "photo.png");
        assert_eq!(original_name(Some("C:\\Users\\a\\cat.jpg".to_string())), "cat.jpg");
        assert_eq!(original_name(Some("  ".to_string())), "file");
        assert_eq!(original_name(None), "file");
    }
}
