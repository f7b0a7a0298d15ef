use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::image::{
    Image as DomainImage, ImageOwner, NewImage as DomainNewImage, UpdateImage as DomainUpdateImage,
};
use crate::models::image::{Image as DbImage, ImageChanges, NewImage as DbNewImage};
use crate::repository::product::ensure_product_exists;
use crate::repository::sku::ensure_sku_exists;
use crate::repository::{
    DieselRepository, ImageReader, ImageWriter, RepositoryError, RepositoryResult,
};

fn into_domain(image: DbImage) -> RepositoryResult<DomainImage> {
    DomainImage::try_from(image).map_err(RepositoryError::Database)
}

fn ensure_owner_exists(conn: &mut SqliteConnection, owner: ImageOwner) -> RepositoryResult<()> {
    match owner {
        ImageOwner::Product(product_id) => ensure_product_exists(conn, product_id),
        ImageOwner::Sku(sku_id) => ensure_sku_exists(conn, sku_id),
    }
}

/// Drop the primary flag from every other image of `owner`.
fn clear_primary(
    conn: &mut SqliteConnection,
    owner: ImageOwner,
    keep_id: Option<i32>,
) -> RepositoryResult<usize> {
    use crate::schema::images;

    let keep: Vec<i32> = keep_id.into_iter().collect();

    let cleared = diesel::update(
        images::table
            .filter(images::imageable_type.eq(owner.imageable_type()))
            .filter(images::imageable_id.eq(owner.imageable_id()))
            .filter(images::is_primary.eq(true))
            .filter(images::id.ne_all(keep)),
    )
    .set((
        images::is_primary.eq(false),
        images::updated_at.eq(Utc::now().naive_utc()),
    ))
    .execute(conn)?;

    Ok(cleared)
}

impl ImageReader for DieselRepository {
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        let image = images::table
            .find(id)
            .filter(images::deleted_at.is_null())
            .first::<DbImage>(&mut conn)
            .optional()?;

        image.map(into_domain).transpose()
    }

    fn list_images(&self, owner: ImageOwner) -> RepositoryResult<Vec<DomainImage>> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        images::table
            .filter(images::imageable_type.eq(owner.imageable_type()))
            .filter(images::imageable_id.eq(owner.imageable_id()))
            .filter(images::deleted_at.is_null())
            .order((
                images::is_primary.desc(),
                images::sequence.asc(),
                images::id.asc(),
            ))
            .load::<DbImage>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}

impl ImageWriter for DieselRepository {
    fn create_image(&self, new_image: &DomainNewImage) -> RepositoryResult<DomainImage> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        conn.transaction::<DomainImage, RepositoryError, _>(|conn| {
            ensure_owner_exists(conn, new_image.owner)?;

            if new_image.is_primary {
                clear_primary(conn, new_image.owner, None)?;
            }

            let created = diesel::insert_into(images::table)
                .values(&DbNewImage::from(new_image))
                .get_result::<DbImage>(conn)?;

            into_domain(created)
        })
    }

    fn update_image(
        &self,
        image_id: i32,
        updates: &DomainUpdateImage,
    ) -> RepositoryResult<DomainImage> {
        use crate::schema::images;

        let mut conn = self.conn()?;

        conn.transaction::<DomainImage, RepositoryError, _>(|conn| {
            let current = images::table
                .find(image_id)
                .filter(images::deleted_at.is_null())
                .first::<DbImage>(conn)?;

            let mut image = into_domain(current)?;
            image.apply(updates);

            if image.is_primary {
                clear_primary(conn, image.owner, Some(image.id))?;
            }

            let updated = diesel::update(images::table.find(image_id))
                .set(&ImageChanges::from(&image))
                .get_result::<DbImage>(conn)?;

            into_domain(updated)
        })
    }

    fn soft_delete_image(&self, image_id: i32, deleted_by: Option<i32>) -> RepositoryResult<()> {
        use crate::schema::images;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            images::table
                .find(image_id)
                .filter(images::deleted_at.is_null()),
        )
        .set((
            images::deleted_at.eq(Some(now)),
            images::is_primary.eq(false),
            images::updated_at.eq(now),
            deleted_by.map(|user_id| images::updated_by.eq(Some(user_id))),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
