use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::banner::BannerParams;

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: BannerParams) -> Result<entity::banner::Model, DbErr> {
        entity::banner::ActiveModel {
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(params.subtitle),
            image_url: ActiveValue::Set(params.image_url),
            link_url: ActiveValue::Set(params.link_url),
            sort_order: ActiveValue::Set(params.sort_order),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: BannerParams,
    ) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(banner) = entity::prelude::Banner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::banner::ActiveModel = banner.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.subtitle = ActiveValue::Set(params.subtitle);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.link_url = ActiveValue::Set(params.link_url);
        active_model.sort_order = ActiveValue::Set(params.sort_order);
        active_model.is_active = ActiveValue::Set(params.is_active);

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets banners in display order, optionally only the active ones
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<entity::banner::Model>, DbErr> {
        let mut query = entity::prelude::Banner::find();

        if active_only {
            query = query.filter(entity::banner::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::banner::Column::SortOrder)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await
    }
}
