use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryListQuery, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, CategoryChanges, NewCategory as DbNewCategory,
};
use crate::repository::slug::{ensure_slug, with_slug_retry};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id)
            .filter(categories::deleted_at.is_null())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug))
            .filter(categories::deleted_at.is_null())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCategory>)> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let build = || {
            let mut items = categories::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !query.include_deleted {
                items = items.filter(categories::deleted_at.is_null());
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(
                    categories::name
                        .like(pattern.clone())
                        .or(categories::description.like(pattern)),
                );
            }

            if let Some(parent_id) = query.parent_id {
                items = items.filter(categories::parent_id.eq(parent_id));
            } else if query.root_only {
                items = items.filter(categories::parent_id.is_null());
            }

            items
        };

        let total = build().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build().order((
            categories::sequence.asc(),
            categories::name.asc(),
            categories::id.asc(),
        ));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let categories = items.load::<DbCategory>(&mut conn)?;
        let categories = categories.into_iter().map(DomainCategory::from).collect();

        Ok((total, categories))
    }

    fn list_child_categories(&self, parent_id: i32) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let children = categories::table
            .filter(categories::parent_id.eq(parent_id))
            .filter(categories::deleted_at.is_null())
            .order((categories::sequence.asc(), categories::name.asc()))
            .load::<DbCategory>(&mut conn)?;

        Ok(children.into_iter().map(DomainCategory::from).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            if let Some(parent_id) = new_category.parent_id {
                ensure_category_exists(conn, parent_id)?;
            }

            let mut new_category = new_category.clone();
            ensure_slug(&mut new_category, conn)?;

            let created = diesel::insert_into(categories::table)
                .values(&DbNewCategory::from(&new_category))
                .get_result::<DbCategory>(conn)?;

            Ok(created.into())
        })
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            let current = categories::table
                .find(category_id)
                .filter(categories::deleted_at.is_null())
                .first::<DbCategory>(conn)?;

            let mut category = DomainCategory::from(current);
            category.apply(updates);

            if let Some(parent_id) = category.parent_id {
                if parent_id == category.id {
                    return Err(RepositoryError::InvalidReference(
                        "a category cannot be its own parent".to_string(),
                    ));
                }
                ensure_category_exists(conn, parent_id)?;
            }

            ensure_slug(&mut category, conn)?;

            let updated = diesel::update(categories::table.find(category_id))
                .set(&CategoryChanges::from(&category))
                .get_result::<DbCategory>(conn)?;

            Ok(updated.into())
        })
    }

    fn soft_delete_category(
        &self,
        category_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            categories::table
                .find(category_id)
                .filter(categories::deleted_at.is_null()),
        )
        .set((
            categories::deleted_at.eq(Some(now)),
            categories::updated_at.eq(now),
            deleted_by.map(|user_id| categories::updated_by.eq(Some(user_id))),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(categories::table.find(category_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Fail with `InvalidReference` unless a live category `category_id` exists.
pub(crate) fn ensure_category_exists(
    conn: &mut SqliteConnection,
    category_id: i32,
) -> RepositoryResult<()> {
    use crate::schema::categories;

    let exists = select(exists(
        categories::table
            .find(category_id)
            .filter(categories::deleted_at.is_null()),
    ))
    .get_result::<bool>(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::InvalidReference(format!(
            "category {category_id} does not exist"
        )))
    }
}
