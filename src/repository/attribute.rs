use chrono::Utc;
use diesel::prelude::*;

use crate::domain::attribute::{
    Attribute as DomainAttribute, AttributeListQuery, NewAttribute as DomainNewAttribute,
    UpdateAttribute as DomainUpdateAttribute,
};
use crate::models::attribute::{
    Attribute as DbAttribute, AttributeChanges, NewAttribute as DbNewAttribute,
};
use crate::repository::{
    AttributeReader, AttributeWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl AttributeReader for DieselRepository {
    fn get_attribute_by_id(&self, id: i32) -> RepositoryResult<Option<DomainAttribute>> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let attribute = attributes::table
            .find(id)
            .filter(attributes::deleted_at.is_null())
            .first::<DbAttribute>(&mut conn)
            .optional()?;

        Ok(attribute.map(DomainAttribute::try_from).transpose()?)
    }

    fn get_attribute_by_code(&self, code: &str) -> RepositoryResult<Option<DomainAttribute>> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let attribute = attributes::table
            .filter(attributes::code.eq(code))
            .filter(attributes::deleted_at.is_null())
            .first::<DbAttribute>(&mut conn)
            .optional()?;

        Ok(attribute.map(DomainAttribute::try_from).transpose()?)
    }

    fn list_attributes(
        &self,
        query: AttributeListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainAttribute>)> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let build = || {
            let mut items = attributes::table.into_boxed::<diesel::sqlite::Sqlite>();

            if !query.include_deleted {
                items = items.filter(attributes::deleted_at.is_null());
            }

            if let Some(term) = query.search.as_ref() {
                let pattern = format!("%{}%", term);
                items = items.filter(
                    attributes::name
                        .like(pattern.clone())
                        .or(attributes::code.like(pattern)),
                );
            }

            items
        };

        let total = build().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = build().order((attributes::sequence.asc(), attributes::name.asc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let attributes = items
            .load::<DbAttribute>(&mut conn)?
            .into_iter()
            .map(DomainAttribute::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, attributes))
    }
}

impl AttributeWriter for DieselRepository {
    fn create_attribute(
        &self,
        new_attribute: &DomainNewAttribute,
    ) -> RepositoryResult<DomainAttribute> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(attributes::table)
            .values(&DbNewAttribute::from(new_attribute))
            .get_result::<DbAttribute>(&mut conn)?;

        Ok(DomainAttribute::try_from(created)?)
    }

    fn update_attribute(
        &self,
        attribute_id: i32,
        updates: &DomainUpdateAttribute,
    ) -> RepositoryResult<DomainAttribute> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        conn.transaction::<DomainAttribute, RepositoryError, _>(|conn| {
            let current = attributes::table
                .find(attribute_id)
                .filter(attributes::deleted_at.is_null())
                .first::<DbAttribute>(conn)?;

            let mut attribute = DomainAttribute::try_from(current)?;
            attribute.apply(updates);

            let updated = diesel::update(attributes::table.find(attribute_id))
                .set(&AttributeChanges::from(&attribute))
                .get_result::<DbAttribute>(conn)?;

            Ok(DomainAttribute::try_from(updated)?)
        })
    }

    fn soft_delete_attribute(
        &self,
        attribute_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            attributes::table
                .find(attribute_id)
                .filter(attributes::deleted_at.is_null()),
        )
        .set((
            attributes::deleted_at.eq(Some(now)),
            attributes::updated_at.eq(now),
            deleted_by.map(|user_id| attributes::updated_by.eq(Some(user_id))),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn delete_attribute(&self, attribute_id: i32) -> RepositoryResult<()> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(attributes::table.find(attribute_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
