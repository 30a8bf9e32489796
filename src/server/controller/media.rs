use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        media::MediaDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::media::Media,
        service::media::{MediaService, MediaUpload},
        state::AppState,
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct MediaUploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Upload an image to the media library.
///
/// Expects a multipart form with a `file` field. Other fields are ignored.
///
/// # Access Control
/// - `Admin` - Only admins can upload files
///
/// # Returns
/// - `201 Created` - Stored file with its public URL
/// - `400 Bad Request` - No file, empty file, too large or not an accepted image type
#[utoipa::path(
    post,
    path = "/api/v1/admin/media",
    tag = MEDIA_TAG,
    security(("bearer" = [])),
    request_body(content = MediaUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = DataDto<MediaDto>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let mime_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        upload = Some(MediaUpload {
            original_name,
            mime_type,
            data: data.to_vec(),
        });
        break;
    }
    let upload = upload.ok_or_else(|| AppError::bad_request("Файл не передан"))?;

    let media = MediaService::new(&state.db, &state.media)
        .upload(upload, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(media.into_dto()))))
}

/// List uploaded files, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/admin/media",
    tag = MEDIA_TAG,
    security(("bearer" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of media files", body = DataDto<Vec<MediaDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = pagination.clamped();
    let media = MediaService::new(&state.db, &state.media)
        .get_paginated(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(media.into_dto(Media::into_dto))))
}

/// Delete an uploaded file and its record.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/media/{id}",
    tag = MEDIA_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Media ID")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    MediaService::new(&state.db, &state.media).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
