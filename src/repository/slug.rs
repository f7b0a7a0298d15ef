//! Keeps the `slug` column of sluggable rows derived from their names.

use std::collections::HashSet;

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::slug::{SlugNamespace, Sluggable, slugify, unique_slug};
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Storage queries the slug orchestrator needs.
pub trait SlugStore {
    /// Name currently stored for the row `id`, including soft-deleted rows.
    fn persisted_name(
        &mut self,
        namespace: SlugNamespace,
        id: i32,
    ) -> RepositoryResult<Option<String>>;

    /// Every slug in use in `namespace`, optionally skipping the row `exclude_id`.
    fn list_slugs(
        &mut self,
        namespace: SlugNamespace,
        exclude_id: Option<i32>,
    ) -> RepositoryResult<Vec<String>>;
}

impl SlugStore for SqliteConnection {
    fn persisted_name(
        &mut self,
        namespace: SlugNamespace,
        id: i32,
    ) -> RepositoryResult<Option<String>> {
        use crate::schema::{categories, products, skus};

        let name = match namespace {
            SlugNamespace::Categories => categories::table
                .find(id)
                .select(categories::name)
                .first::<String>(self)
                .optional()?,
            SlugNamespace::Products => products::table
                .find(id)
                .select(products::name)
                .first::<String>(self)
                .optional()?,
            SlugNamespace::Skus => skus::table
                .find(id)
                .select(skus::name)
                .first::<String>(self)
                .optional()?,
        };

        Ok(name)
    }

    fn list_slugs(
        &mut self,
        namespace: SlugNamespace,
        exclude_id: Option<i32>,
    ) -> RepositoryResult<Vec<String>> {
        use crate::schema::{categories, products, skus};

        let slugs = match namespace {
            SlugNamespace::Categories => {
                let mut query = categories::table
                    .select(categories::slug)
                    .into_boxed::<Sqlite>();
                if let Some(id) = exclude_id {
                    query = query.filter(categories::id.ne(id));
                }
                query.load::<String>(self)?
            }
            SlugNamespace::Products => {
                let mut query = products::table
                    .select(products::slug)
                    .into_boxed::<Sqlite>();
                if let Some(id) = exclude_id {
                    query = query.filter(products::id.ne(id));
                }
                query.load::<String>(self)?
            }
            SlugNamespace::Skus => {
                let mut query = skus::table.select(skus::slug).into_boxed::<Sqlite>();
                if let Some(id) = exclude_id {
                    query = query.filter(skus::id.ne(id));
                }
                query.load::<String>(self)?
            }
        };

        Ok(slugs)
    }
}

/// Bring `entity.slug()` in line with its name before the row is written.
///
/// New entities always get a fresh slug. Persisted ones only do when their
/// stored name differs from the in-memory one, when the stored name cannot be
/// read, or when they carry no slug yet. A name without any alphanumeric
/// character leaves the slug untouched.
pub fn ensure_slug<E, S>(entity: &mut E, store: &mut S) -> RepositoryResult<()>
where
    E: Sluggable + ?Sized,
    S: SlugStore + ?Sized,
{
    let regenerate = needs_regeneration(entity, store);
    if !regenerate && !entity.slug().is_empty() {
        return Ok(());
    }

    let base = slugify(entity.name());
    if base.is_empty() {
        return Ok(());
    }

    let existing: HashSet<String> = store
        .list_slugs(entity.namespace(), entity.id())?
        .into_iter()
        .collect();

    entity.set_slug(unique_slug(&base, &existing));
    Ok(())
}

fn needs_regeneration<E, S>(entity: &E, store: &mut S) -> bool
where
    E: Sluggable + ?Sized,
    S: SlugStore + ?Sized,
{
    let Some(id) = entity.id() else {
        return true;
    };

    match store.persisted_name(entity.namespace(), id) {
        Ok(Some(name)) => name != entity.name(),
        Ok(None) => true,
        Err(err) => {
            log::warn!(
                "Could not read stored name of {} #{id}, regenerating slug: {err}",
                entity.namespace()
            );
            true
        }
    }
}

/// Run `write` in a transaction, retrying once when a concurrent writer took
/// the slug between the lookup and the insert.
pub(crate) fn with_slug_retry<T, F>(conn: &mut SqliteConnection, mut write: F) -> RepositoryResult<T>
where
    F: FnMut(&mut SqliteConnection) -> RepositoryResult<T>,
{
    match conn.transaction::<T, RepositoryError, _>(|conn| write(conn)) {
        Err(err) if err.is_slug_conflict() => {
            log::warn!("Slug taken by a concurrent write, retrying once: {err}");
            conn.transaction::<T, RepositoryError, _>(|conn| write(conn))
        }
        result => result,
    }
}
