use chrono::{DateTime, Utc};

use crate::model::banner::BannerDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    pub fn from_entity(entity: entity::banner::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            subtitle: entity.subtitle,
            image_url: entity.image_url,
            link_url: entity.link_url,
            sort_order: entity.sort_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            image_url: self.image_url,
            link_url: self.link_url,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BannerParams {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}
