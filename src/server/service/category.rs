use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::category::CategoryPayloadDto,
    server::{
        data::category::CategoryRepository,
        error::AppError,
        model::category::{Category, CategoryDetail, CategoryParams, CategoryWithCount},
        service::clean_optional,
        util::slug::resolve_slug,
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every category ordered by sort order then name, with active product counts
    pub async fn get_all(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo.get_all().await?;
        let counts = repo.count_active_products().await?;

        Ok(with_counts(categories, &counts))
    }

    /// Gets a category and its direct children by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryDetail, AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Категория не найдена"))?;
        let children = repo.get_children(category.id).await?;
        let counts = repo.count_active_products().await?;

        let mut category = with_counts(vec![category], &counts);
        let Some(category) = category.pop() else {
            return Err(AppError::not_found("Категория не найдена"));
        };

        Ok(CategoryDetail {
            category,
            children: with_counts(children, &counts),
        })
    }

    /// Creates a category, generating the slug from the name when none is given
    pub async fn create(&self, payload: CategoryPayloadDto) -> Result<CategoryWithCount, AppError> {
        let params = self.validate(None, payload).await?;

        let created = CategoryRepository::new(self.db).create(params).await?;

        tracing::info!("Created category {} ({})", created.id, created.slug);

        Ok(CategoryWithCount {
            category: Category::from_entity(created),
            product_count: 0,
        })
    }

    /// Overwrites a category's editable fields
    pub async fn update(
        &self,
        id: i32,
        payload: CategoryPayloadDto,
    ) -> Result<CategoryWithCount, AppError> {
        let params = self.validate(Some(id), payload).await?;
        let repo = CategoryRepository::new(self.db);

        let updated = repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found("Категория не найдена"))?;
        let counts = repo.count_active_products().await?;

        Ok(CategoryWithCount {
            product_count: counts.get(&updated.id).copied().unwrap_or(0),
            category: Category::from_entity(updated),
        })
    }

    /// Deletes a category; its products become uncategorised and its children top-level
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Категория не найдена"));
        }

        tracing::info!("Deleted category {}", id);

        Ok(())
    }

    async fn validate(
        &self,
        id: Option<i32>,
        payload: CategoryPayloadDto,
    ) -> Result<CategoryParams, AppError> {
        let repo = CategoryRepository::new(self.db);

        let name = payload.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request("Укажите название категории"));
        }

        let slug = resolve_slug(payload.slug.as_deref(), &name);
        if slug.is_empty() {
            return Err(AppError::bad_request(
                "Не удалось сформировать slug, укажите его вручную",
            ));
        }
        if repo.slug_taken(&slug, id).await? {
            return Err(AppError::conflict("Категория с таким slug уже существует"));
        }

        if let Some(parent_id) = payload.parent_id {
            if Some(parent_id) == id {
                return Err(AppError::bad_request(
                    "Категория не может быть родителем самой себя",
                ));
            }

            let parents: HashMap<i32, Option<i32>> = repo
                .get_all()
                .await?
                .into_iter()
                .map(|c| (c.id, c.parent_id))
                .collect();

            if !parents.contains_key(&parent_id) {
                return Err(AppError::bad_request("Родительская категория не найдена"));
            }
            if let Some(id) = id {
                if is_descendant(&parents, parent_id, id) {
                    return Err(AppError::bad_request(
                        "Нельзя вложить категорию в её собственную подкатегорию",
                    ));
                }
            }
        }

        Ok(CategoryParams {
            name,
            slug,
            description: clean_optional(payload.description),
            parent_id: payload.parent_id,
            image_url: clean_optional(payload.image_url),
            sort_order: payload.sort_order,
        })
    }
}

fn with_counts(
    categories: Vec<entity::category::Model>,
    counts: &HashMap<i32, u64>,
) -> Vec<CategoryWithCount> {
    categories
        .into_iter()
        .map(|c| {
            let product_count = counts.get(&c.id).copied().unwrap_or(0);
            CategoryWithCount {
                category: Category::from_entity(c),
                product_count,
            }
        })
        .collect()
}

/// Walks up from `candidate` and reports whether `ancestor` is on its parent chain.
fn is_descendant(parents: &HashMap<i32, Option<i32>>, candidate: i32, ancestor: i32) -> bool {
    let mut current = Some(candidate);
    let mut steps = 0;

    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        // Guards against a chain that is already cyclic.
        steps += 1;
        if steps > parents.len() {
            return false;
        }
        current = parents.get(&id).copied().flatten();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_descendants() {
        // 1 -> 2 -> 3
        let parents = HashMap::from([(1, None), (2, Some(1)), (3, Some(2))]);

        assert!(is_descendant(&parents, 3, 1));
        assert!(is_descendant(&parents, 2, 1));
        assert!(!is_descendant(&parents, 1, 3));
        assert!(!is_descendant(&parents, 1, 2));
    }
}
