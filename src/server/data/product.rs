//! Product data repository.
//!
//! Handles product rows together with their ordered image list, the storefront
//! listing query with its filters and sorts, and the guarded stock updates used by
//! checkout and cancellation.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::product::ProductSort,
    server::{
        data::contains_ignore_case,
        model::product::{ProductFilter, ProductParams},
    },
};

/// Repository for products and product images.
///
/// Generic over the connection so checkout can run stock updates inside its
/// transaction.
pub struct ProductRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a product and its images.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created product
    /// - `Err(DbErr)` - Database error, including unique violations on slug or SKU
    pub async fn create(&self, params: ProductParams) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        let images = params.images;

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            sku: ActiveValue::Set(params.sku),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            compare_at_price: ActiveValue::Set(params.compare_at_price),
            stock: ActiveValue::Set(params.stock),
            category_id: ActiveValue::Set(params.category_id),
            is_active: ActiveValue::Set(params.is_active),
            is_featured: ActiveValue::Set(params.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_images(product.id, images).await?;

        Ok(product)
    }

    /// Overwrites a product's fields and replaces its image list.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated product
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: ProductParams,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = product.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.slug = ActiveValue::Set(params.slug);
        active_model.sku = ActiveValue::Set(params.sku);
        active_model.description = ActiveValue::Set(params.description);
        active_model.price = ActiveValue::Set(params.price);
        active_model.compare_at_price = ActiveValue::Set(params.compare_at_price);
        active_model.stock = ActiveValue::Set(params.stock);
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.is_featured = ActiveValue::Set(params.is_featured);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let product = active_model.update(self.db).await?;

        entity::prelude::ProductImage::delete_many()
            .filter(entity::product_image::Column::ProductId.eq(id))
            .exec(self.db)
            .await?;
        self.insert_images(id, params.images).await?;

        Ok(Some(product))
    }

    async fn insert_images(&self, product_id: i32, images: Vec<String>) -> Result<(), DbErr> {
        for (position, url) in images.into_iter().enumerate() {
            entity::product_image::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                url: ActiveValue::Set(url),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes a product. Images, reviews and cart lines cascade; order lines keep
    /// their snapshot with `product_id` set to null.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Image URLs of a product in display order.
    pub async fn get_images(&self, product_id: i32) -> Result<Vec<String>, DbErr> {
        let images = entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .order_by_asc(entity::product_image::Column::Position)
            .order_by_asc(entity::product_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(images.into_iter().map(|image| image.url).collect())
    }

    /// First image URL for each of the given products that has one.
    pub async fn get_first_images(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<i32, String>, DbErr> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.is_in(product_ids.iter().copied()))
            .order_by_asc(entity::product_image::Column::Position)
            .order_by_asc(entity::product_image::Column::Id)
            .all(self.db)
            .await?;

        let mut first = HashMap::new();
        for image in images {
            first.entry(image.product_id).or_insert(image.url);
        }

        Ok(first)
    }

    /// Gets a filtered, sorted page of products.
    ///
    /// # Arguments
    /// - `filter` - Resolved listing filter (category ids, search, price range, flags, sort)
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of products per page
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the page and total matching products
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::product::Model>, u64), DbErr> {
        let paginator = Self::filtered(filter).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page).await?;

        Ok((products, total))
    }

    fn filtered(filter: &ProductFilter) -> Select<entity::product::Entity> {
        use entity::product::Column;

        let mut query = entity::prelude::Product::find();

        if !filter.include_inactive {
            query = query.filter(Column::IsActive.eq(true));
        }
        if let Some(ids) = &filter.category_ids {
            query = query.filter(Column::CategoryId.is_in(ids.iter().copied()));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(contains_ignore_case(Column::Name, search))
                    .add(contains_ignore_case(Column::Sku, search)),
            );
        }
        if let Some(min) = filter.min_price {
            query = query.filter(Column::Price.gte(min));
        }
        if let Some(max) = filter.max_price {
            query = query.filter(Column::Price.lte(max));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(Column::IsFeatured.eq(featured));
        }
        if filter.in_stock {
            query = query.filter(Column::Stock.gt(0));
        }

        let query = match filter.sort {
            ProductSort::Newest => query.order_by_desc(Column::CreatedAt),
            ProductSort::PriceAsc => query.order_by_asc(Column::Price),
            ProductSort::PriceDesc => query.order_by_desc(Column::Price),
            ProductSort::Name => query.order_by_asc(Column::Name),
        };

        query.order_by_desc(Column::Id)
    }

    /// Checks whether a slug is used by a product other than `exclude_id`
    pub async fn slug_taken(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.column_taken(entity::product::Column::Slug, slug, exclude_id)
            .await
    }

    /// Checks whether a SKU is used by a product other than `exclude_id`
    pub async fn sku_taken(&self, sku: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.column_taken(entity::product::Column::Sku, sku, exclude_id)
            .await
    }

    async fn column_taken(
        &self,
        column: entity::product::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Product::find().filter(column.eq(value));

        if let Some(id) = exclude_id {
            query = query.filter(entity::product::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Takes `quantity` units from stock if at least that many are available.
    ///
    /// The check and the write are a single conditional UPDATE.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock decremented
    /// - `Ok(false)` - Not enough stock (or no such product); nothing changed
    pub async fn decrement_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).sub(quantity),
            )
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns `quantity` units to stock. Missing products are ignored.
    pub async fn increment_stock(&self, id: i32, quantity: i32) -> Result<(), DbErr> {
        entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).add(quantity),
            )
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
