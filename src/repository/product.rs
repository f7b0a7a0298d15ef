use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductChanges};
use crate::repository::category::ensure_category_exists;
use crate::repository::slug::{ensure_slug, with_slug_retry};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id)
            .filter(products::deleted_at.is_null())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::slug.eq(slug))
            .filter(products::deleted_at.is_null())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let build = || {
            let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !query.include_deleted {
                items = items.filter(products::deleted_at.is_null());
            }

            if let Some(category_id) = query.category_id {
                items = items.filter(products::category_id.eq(category_id));
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(
                    products::name
                        .like(pattern.clone())
                        .or(products::description.like(pattern)),
                );
            }

            items
        };

        let total = build().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build().order((
            products::sequence.asc(),
            products::name.asc(),
            products::id.asc(),
        ));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let products = items
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(DomainProduct::from)
            .collect();

        Ok((total, products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            ensure_category_exists(conn, new_product.category_id)?;

            let mut new_product = new_product.clone();
            ensure_slug(&mut new_product, conn)?;

            let created = diesel::insert_into(products::table)
                .values(&DbNewProduct::from(&new_product))
                .get_result::<DbProduct>(conn)?;

            Ok(created.into())
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        with_slug_retry(&mut conn, |conn| {
            let current = products::table
                .find(product_id)
                .filter(products::deleted_at.is_null())
                .first::<DbProduct>(conn)?;

            let mut product = DomainProduct::from(current);
            product.apply(updates);

            if updates.category_id.is_some() {
                ensure_category_exists(conn, product.category_id)?;
            }

            ensure_slug(&mut product, conn)?;

            let updated = diesel::update(products::table.find(product_id))
                .set(&ProductChanges::from(&product))
                .get_result::<DbProduct>(conn)?;

            Ok(updated.into())
        })
    }

    fn soft_delete_product(
        &self,
        product_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            products::table
                .find(product_id)
                .filter(products::deleted_at.is_null()),
        )
        .set((
            products::deleted_at.eq(Some(now)),
            products::updated_at.eq(now),
            deleted_by.map(|user_id| products::updated_by.eq(Some(user_id))),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(product_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Fail with `InvalidReference` unless a live product `product_id` exists.
pub(crate) fn ensure_product_exists(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> RepositoryResult<()> {
    use crate::schema::products;

    let exists = select(exists(
        products::table
            .find(product_id)
            .filter(products::deleted_at.is_null()),
    ))
    .get_result::<bool>(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::InvalidReference(format!(
            "product {product_id} does not exist"
        )))
    }
}
