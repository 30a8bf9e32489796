use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::media::CreateMediaParams;

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMediaParams) -> Result<entity::media::Model, DbErr> {
        entity::media::ActiveModel {
            file_name: ActiveValue::Set(params.file_name),
            original_name: ActiveValue::Set(params.original_name),
            mime_type: ActiveValue::Set(params.mime_type),
            size: ActiveValue::Set(params.size),
            url: ActiveValue::Set(params.url),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::media::Model>, DbErr> {
        entity::prelude::Media::find_by_id(id).one(self.db).await
    }

    /// Gets a page of uploads, newest first
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::media::Model>, u64), DbErr> {
        let paginator = entity::prelude::Media::find()
            .order_by_desc(entity::media::Column::CreatedAt)
            .order_by_desc(entity::media::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let media = paginator.fetch_page(page).await?;

        Ok((media, total))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Media::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
