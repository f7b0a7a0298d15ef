use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::sku::{
    NewSku as DomainNewSku, Sku as DomainSku, SkuListQuery, UpdateSku as DomainUpdateSku,
};
use crate::models::sku::{NewSku as DbNewSku, Sku as DbSku, SkuChanges};
use crate::repository::product::ensure_product_exists;
use crate::repository::slug::{ensure_slug, with_slug_retry};
use crate::repository::{DieselRepository, RepositoryError, RepositoryResult, SkuReader, SkuWriter};

impl SkuReader for DieselRepository {
    fn get_sku_by_id(&self, id: i32) -> RepositoryResult<Option<DomainSku>> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        let sku = skus::table
            .find(id)
            .filter(skus::deleted_at.is_null())
            .first::<DbSku>(&mut conn)
            .optional()?;

        Ok(sku.map(Into::into))
    }

    fn get_sku_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainSku>> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        let sku = skus::table
            .filter(skus::slug.eq(slug))
            .filter(skus::deleted_at.is_null())
            .first::<DbSku>(&mut conn)
            .optional()?;

        Ok(sku.map(Into::into))
    }

    fn list_skus(&self, query: SkuListQuery) -> RepositoryResult<(usize, Vec<DomainSku>)> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        let build = || {
            let mut items = skus::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !query.include_deleted {
                items = items.filter(skus::deleted_at.is_null());
            }

            if let Some(product_id) = query.product_id {
                items = items.filter(skus::product_id.eq(product_id));
            }

            if let Some(sku_number) = query.sku_number.as_ref() {
                items = items.filter(skus::sku_number.eq(sku_number.clone()));
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(skus::name.like(pattern));
            }

            items
        };

        let total = build().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build().order((skus::sequence.asc(), skus::name.asc(), skus::id.asc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let skus = items
            .load::<DbSku>(&mut conn)?
            .into_iter()
            .map(DomainSku::from)
            .collect();

        Ok((total, skus))
    }
}

impl SkuWriter for DieselRepository {
    fn create_sku(&self, new_sku: &DomainNewSku) -> RepositoryResult<DomainSku> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            ensure_product_exists(conn, new_sku.product_id)?;

            let mut new_sku = new_sku.clone();
            ensure_slug(&mut new_sku, conn)?;

            let created = diesel::insert_into(skus::table)
                .values(&DbNewSku::from(&new_sku))
                .get_result::<DbSku>(conn)?;

            Ok(created.into())
        })
    }

    fn update_sku(&self, sku_id: i32, updates: &DomainUpdateSku) -> RepositoryResult<DomainSku> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            let current = skus::table
                .find(sku_id)
                .filter(skus::deleted_at.is_null())
                .first::<DbSku>(conn)?;

            let mut sku = DomainSku::from(current);
            sku.apply(updates);

            if updates.product_id.is_some() {
                ensure_product_exists(conn, sku.product_id)?;
            }

            ensure_slug(&mut sku, conn)?;

            let updated = diesel::update(skus::table.find(sku_id))
                .set(&SkuChanges::from(&sku))
                .get_result::<DbSku>(conn)?;

            Ok(updated.into())
        })
    }

    fn soft_delete_sku(&self, sku_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()> {
        use crate::schema::skus;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(skus::table.find(sku_id).filter(skus::deleted_at.is_null()))
            .set((
                skus::deleted_at.eq(Some(now)),
                skus::updated_at.eq(now),
                deleted_by.map(|user_id| skus::updated_by.eq(Some(user_id))),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_sku(&self, sku_id: i32) -> RepositoryResult<()> {
        use crate::schema::skus;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(skus::table.find(sku_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Fail with `InvalidReference` unless a live SKU `sku_id` exists.
pub(crate) fn ensure_sku_exists(conn: &mut SqliteConnection, sku_id: i32) -> RepositoryResult<()> {
    use crate::schema::skus;

    let exists = select(exists(
        skus::table.find(sku_id).filter(skus::deleted_at.is_null()),
    ))
    .get_result::<bool>(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::InvalidReference(format!(
            "sku {sku_id} does not exist"
        )))
    }
}
