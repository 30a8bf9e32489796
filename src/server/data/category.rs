use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::category::CategoryParams;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new category
    pub async fn create(&self, params: CategoryParams) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            parent_id: ActiveValue::Set(params.parent_id),
            image_url: ActiveValue::Set(params.image_url),
            sort_order: ActiveValue::Set(params.sort_order),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites all editable fields; `Ok(None)` when the category does not exist
    pub async fn update(
        &self,
        id: i32,
        params: CategoryParams,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.slug = ActiveValue::Set(params.slug);
        active_model.description = ActiveValue::Set(params.description);
        active_model.parent_id = ActiveValue::Set(params.parent_id);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.sort_order = ActiveValue::Set(params.sort_order);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a category, detaching its products and child categories first.
    ///
    /// Returns false when nothing was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::product::Column::CategoryId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Category::update_many()
            .col_expr(
                entity::category::Column::ParentId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::category::Column::ParentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets all categories ordered for navigation menus (sort_order, then name)
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::SortOrder)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the direct children of a category
    pub async fn get_children(
        &self,
        parent_id: i32,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::category::Column::SortOrder)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    /// Counts active products per category id; categories without products are absent
    pub async fn count_active_products(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let rows: Vec<(Option<i32>, i64)> = entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::CategoryId)
            .column_as(entity::product::Column::Id.count(), "product_count")
            .filter(entity::product::Column::IsActive.eq(true))
            .filter(entity::product::Column::CategoryId.is_not_null())
            .group_by(entity::product::Column::CategoryId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(category_id, count)| category_id.map(|id| (id, count.max(0) as u64)))
            .collect())
    }

    /// Checks whether a slug is used by a category other than `exclude_id`
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Category::find().filter(entity::category::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
