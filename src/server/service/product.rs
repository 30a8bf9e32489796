//! Product catalog service.
//!
//! Public reads only ever see active products; the admin variants include
//! inactive ones. Writes validate the payload, resolve the slug and check
//! slug/SKU uniqueness before touching the database.

use sea_orm::DatabaseConnection;

use crate::{
    model::product::{ProductListQuery, ProductPayloadDto},
    server::{
        data::{category::CategoryRepository, product::ProductRepository, review::ReviewRepository},
        error::AppError,
        model::{
            category::Category,
            page::Page,
            product::{
                Product, ProductDetail, ProductFilter, ProductListItem, ProductParams,
                ReviewSummary,
            },
        },
        util::slug::resolve_slug,
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Storefront listing: active products only.
    pub async fn get_public_page(
        &self,
        query: ProductListQuery,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ProductListItem>, AppError> {
        self.get_page(query, false, page, per_page).await
    }

    /// Admin listing: inactive products included.
    pub async fn get_admin_page(
        &self,
        query: ProductListQuery,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ProductListItem>, AppError> {
        self.get_page(query, true, page, per_page).await
    }

    /// Product detail for the storefront. Inactive products are reported as missing.
    pub async fn get_public_by_slug(&self, slug: &str) -> Result<ProductDetail, AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::not_found("Товар не найден"))?;

        self.detail(product).await
    }

    /// Product detail for the admin panel, regardless of `is_active`.
    pub async fn get_by_id(&self, id: i32) -> Result<ProductDetail, AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Товар не найден"))?;

        self.detail(product).await
    }

    pub async fn create(&self, payload: ProductPayloadDto) -> Result<ProductDetail, AppError> {
        let params = self.validate(None, payload).await?;

        let created = ProductRepository::new(self.db).create(params).await?;

        tracing::info!("Created product {} ({})", created.id, created.sku);

        self.detail(created).await
    }

    /// Overwrites a product; the image list is replaced as a whole.
    pub async fn update(
        &self,
        id: i32,
        payload: ProductPayloadDto,
    ) -> Result<ProductDetail, AppError> {
        let params = self.validate(Some(id), payload).await?;

        let updated = ProductRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found("Товар не найден"))?;

        self.detail(updated).await
    }

    /// Deletes a product. Images, reviews and cart lines go with it; order
    /// lines keep their snapshot and lose the link.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProductRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Товар не найден"));
        }

        tracing::info!("Deleted product {}", id);

        Ok(())
    }

    async fn get_page(
        &self,
        query: ProductListQuery,
        include_inactive: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<ProductListItem>, AppError> {
        let category_ids = match query.category.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => {
                let category_repo = CategoryRepository::new(self.db);
                let Some(category) = category_repo.find_by_slug(slug).await? else {
                    return Ok(Page::new(Vec::new(), 0, page, per_page));
                };

                let mut ids = vec![category.id];
                ids.extend(
                    category_repo
                        .get_children(category.id)
                        .await?
                        .into_iter()
                        .map(|c| c.id),
                );
                Some(ids)
            }
            _ => None,
        };

        let filter = ProductFilter {
            category_ids,
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            min_price: query.min_price,
            max_price: query.max_price,
            featured: query.featured,
            in_stock: query.in_stock.unwrap_or(false),
            include_inactive,
            sort: query.sort,
        };

        let product_repo = ProductRepository::new(self.db);
        let (products, total) = product_repo.get_paginated(&filter, page, per_page).await?;

        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut images = product_repo.get_first_images(&ids).await?;

        let items = products
            .into_iter()
            .map(|p| ProductListItem {
                image_url: images.remove(&p.id),
                product: Product::from_entity(p),
            })
            .collect();

        Ok(Page::new(items, total, page, per_page))
    }

    async fn detail(&self, product: entity::product::Model) -> Result<ProductDetail, AppError> {
        let images = ProductRepository::new(self.db)
            .get_images(product.id)
            .await?;

        let category = match product.category_id {
            Some(category_id) => CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .map(Category::from_entity),
            None => None,
        };

        let (rating_sum, review_count) = ReviewRepository::new(self.db)
            .approved_totals(product.id)
            .await?;

        Ok(ProductDetail {
            product: Product::from_entity(product),
            category,
            images,
            reviews: ReviewSummary::from_totals(rating_sum, review_count),
        })
    }

    async fn validate(
        &self,
        id: Option<i32>,
        payload: ProductPayloadDto,
    ) -> Result<ProductParams, AppError> {
        let name = payload.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request("Укажите название товара"));
        }
        let sku = payload.sku.trim().to_string();
        if sku.is_empty() {
            return Err(AppError::bad_request("Укажите артикул товара"));
        }
        if payload.price <= 0 {
            return Err(AppError::bad_request("Цена должна быть больше нуля"));
        }
        if payload.stock < 0 {
            return Err(AppError::bad_request("Остаток не может быть отрицательным"));
        }
        if payload
            .compare_at_price
            .is_some_and(|compare_at| compare_at <= payload.price)
        {
            return Err(AppError::bad_request(
                "Старая цена должна быть больше текущей",
            ));
        }

        let slug = resolve_slug(payload.slug.as_deref(), &name);
        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Не удалось сформировать slug, укажите его вручную",
            ));
        }

        if let Some(category_id) = payload.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::bad_request("Категория не найдена"));
            }
        }

        let product_repo = ProductRepository::new(self.db);
        if product_repo.slug_taken(&slug, id).await? {
            return Err(AppError::conflict("Товар с таким slug уже существует"));
        }
        if product_repo.sku_taken(&sku, id).await? {
            return Err(AppError::conflict("Товар с таким артикулом уже существует"));
        }

        let images = payload
            .images
            .into_iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        Ok(ProductParams {
            name,
            slug,
            sku,
            description: payload.description.trim().to_string(),
            price: payload.price,
            compare_at_price: payload.compare_at_price,
            stock: payload.stock,
            category_id: payload.category_id,
            is_active: payload.is_active,
            is_featured: payload.is_featured,
            images,
        })
    }
}
