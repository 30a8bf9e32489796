//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a review with the given rating and moderation state.
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i32,
    user_id: i32,
    rating: i32,
    is_approved: bool,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        user_id: ActiveValue::Set(user_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(format!("Rated {}", rating)),
        is_approved: ActiveValue::Set(is_approved),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
