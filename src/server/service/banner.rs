use sea_orm::DatabaseConnection;

use crate::{
    model::banner::BannerPayloadDto,
    server::{
        data::banner::BannerRepository,
        error::AppError,
        model::banner::{Banner, BannerParams},
        service::clean_optional,
    },
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Banners ordered by sort order; `active_only` for the storefront carousel
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Banner>, AppError> {
        let banners = BannerRepository::new(self.db).get_all(active_only).await?;

        Ok(banners.into_iter().map(Banner::from_entity).collect())
    }

    pub async fn create(&self, payload: BannerPayloadDto) -> Result<Banner, AppError> {
        let created = BannerRepository::new(self.db)
            .create(validate(payload)?)
            .await?;

        Ok(Banner::from_entity(created))
    }

    pub async fn update(&self, id: i32, payload: BannerPayloadDto) -> Result<Banner, AppError> {
        BannerRepository::new(self.db)
            .update(id, validate(payload)?)
            .await?
            .map(Banner::from_entity)
            .ok_or_else(|| AppError::not_found("Баннер не найден"))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BannerRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Баннер не найден"));
        }

        Ok(())
    }
}

fn validate(payload: BannerPayloadDto) -> Result<BannerParams, AppError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::bad_request("Укажите заголовок баннера"));
    }
    let image_url = payload.image_url.trim().to_string();
    if image_url.is_empty() {
        return Err(AppError::bad_request("Укажите изображение баннера"));
    }

    Ok(BannerParams {
        title,
        subtitle: clean_optional(payload.subtitle),
        image_url,
        link_url: clean_optional(payload.link_url),
        sort_order: payload.sort_order,
        is_active: payload.is_active,
    })
}
