//! Storage of SKU attribute values, validated against their attribute's type.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::attribute::Attribute as DomainAttribute;
use crate::domain::attribute_type::TypedValue;
use crate::domain::attribute_value::{
    AttributeAssignment, AttributeValue as DomainAttributeValue, AttributeValueError,
    AttributeValueView, NewAttributeValue as DomainNewAttributeValue,
    UpdateAttributeValue as DomainUpdateAttributeValue, check_value, display_value,
};
use crate::models::attribute::Attribute as DbAttribute;
use crate::models::attribute_value::{
    AttributeValue as DbAttributeValue, AttributeValueChanges,
    NewAttributeValue as DbNewAttributeValue,
};
use crate::repository::sku::ensure_sku_exists;
use crate::repository::{
    AttributeValueReader, AttributeValueWriter, DieselRepository, RepositoryError,
    RepositoryResult,
};

/// Lookup of attribute definitions by id.
pub trait AttributeSource {
    /// Live (not soft-deleted) attribute `id`.
    fn attribute_by_id(&mut self, id: i32) -> RepositoryResult<Option<DomainAttribute>>;
}

impl AttributeSource for SqliteConnection {
    fn attribute_by_id(&mut self, id: i32) -> RepositoryResult<Option<DomainAttribute>> {
        use crate::schema::attributes;

        let attribute = attributes::table
            .find(id)
            .filter(attributes::deleted_at.is_null())
            .first::<DbAttribute>(self)
            .optional()?;

        Ok(attribute.map(DomainAttribute::try_from).transpose()?)
    }
}

/// Attribute owning `value`: the attached copy when present, otherwise fetched.
pub fn resolve_attribute<A, S>(value: &A, source: &mut S) -> RepositoryResult<DomainAttribute>
where
    A: AttributeAssignment + ?Sized,
    S: AttributeSource + ?Sized,
{
    if let Some(attribute) = value.attached_attribute() {
        return Ok(attribute.clone());
    }

    source
        .attribute_by_id(value.attribute_id())?
        .ok_or_else(|| AttributeValueError::AttributeNotFound(value.attribute_id()).into())
}

/// Reject `value` unless its raw text parses under its attribute's data type.
pub fn validate_assignment<A, S>(value: &A, source: &mut S) -> RepositoryResult<DomainAttribute>
where
    A: AttributeAssignment + ?Sized,
    S: AttributeSource + ?Sized,
{
    let attribute = resolve_attribute(value, source)?;
    check_value(&attribute, value.raw_value())?;
    Ok(attribute)
}

pub fn display_value_for<S>(value: &DomainAttributeValue, source: &mut S) -> RepositoryResult<String>
where
    S: AttributeSource + ?Sized,
{
    let attribute = resolve_attribute(value, source)?;
    Ok(display_value(&value.value, &attribute))
}

pub fn parsed_value_for<S>(
    value: &DomainAttributeValue,
    source: &mut S,
) -> RepositoryResult<TypedValue>
where
    S: AttributeSource + ?Sized,
{
    let attribute = resolve_attribute(value, source)?;
    Ok(value.parsed_with(&attribute)?)
}

/// Format `typed` with the owning attribute's type and store it on `value`.
pub fn set_typed_value<S>(
    value: &mut DomainAttributeValue,
    typed: &TypedValue,
    source: &mut S,
) -> RepositoryResult<()>
where
    S: AttributeSource + ?Sized,
{
    let attribute = resolve_attribute(value, source)?;
    value.set_value_with(&attribute, typed)?;
    value.attribute = Some(attribute);
    Ok(())
}

fn load_live_value(
    conn: &mut SqliteConnection,
    value_id: i32,
) -> RepositoryResult<DomainAttributeValue> {
    use crate::schema::sku_attribute_values;

    let current = sku_attribute_values::table
        .find(value_id)
        .filter(sku_attribute_values::deleted_at.is_null())
        .first::<DbAttributeValue>(conn)?;

    Ok(current.into())
}

fn write_value(
    conn: &mut SqliteConnection,
    value: &DomainAttributeValue,
) -> RepositoryResult<DomainAttributeValue> {
    use crate::schema::sku_attribute_values;

    let updated = diesel::update(sku_attribute_values::table.find(value.id))
        .set(&AttributeValueChanges::from(value))
        .get_result::<DbAttributeValue>(conn)?;

    Ok(updated.into())
}

impl AttributeValueReader for DieselRepository {
    fn get_attribute_value_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<DomainAttributeValue>> {
        use crate::schema::sku_attribute_values;

        let mut conn = self.conn()?;

        let value = sku_attribute_values::table
            .find(id)
            .filter(sku_attribute_values::deleted_at.is_null())
            .first::<DbAttributeValue>(&mut conn)
            .optional()?;

        let Some(value) = value else {
            return Ok(None);
        };

        let value = DomainAttributeValue::from(value);
        let attribute = resolve_attribute(&value, &mut *conn)?;
        Ok(Some(value.with_attribute(attribute)))
    }

    fn list_sku_attribute_values(&self, sku_id: i32) -> RepositoryResult<Vec<AttributeValueView>> {
        use crate::schema::{attributes, sku_attribute_values};

        let mut conn = self.conn()?;

        let rows = sku_attribute_values::table
            .inner_join(attributes::table)
            .filter(sku_attribute_values::sku_id.eq(sku_id))
            .filter(sku_attribute_values::deleted_at.is_null())
            .filter(attributes::deleted_at.is_null())
            .order((
                sku_attribute_values::sequence.asc(),
                sku_attribute_values::id.asc(),
            ))
            .select((DbAttributeValue::as_select(), DbAttribute::as_select()))
            .load::<(DbAttributeValue, DbAttribute)>(&mut conn)?;

        rows.into_iter()
            .map(|(value, attribute)| -> RepositoryResult<AttributeValueView> {
                let attribute = DomainAttribute::try_from(attribute)?;
                Ok(AttributeValueView::new(value.into(), &attribute))
            })
            .collect()
    }
}

impl AttributeValueWriter for DieselRepository {
    fn create_attribute_value(
        &self,
        new_value: &DomainNewAttributeValue,
    ) -> RepositoryResult<DomainAttributeValue> {
        use crate::schema::sku_attribute_values;

        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<DomainAttributeValue, RepositoryError, _>(|conn| {
            ensure_sku_exists(conn, new_value.sku_id)?;
            let attribute = validate_assignment(new_value, conn)?;

            let created = diesel::insert_into(sku_attribute_values::table)
                .values(&DbNewAttributeValue::from(new_value))
                .get_result::<DbAttributeValue>(conn)?;

            Ok(DomainAttributeValue::from(created).with_attribute(attribute))
        })
    }

    fn update_attribute_value(
        &self,
        value_id: i32,
        updates: &DomainUpdateAttributeValue,
    ) -> RepositoryResult<DomainAttributeValue> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<DomainAttributeValue, RepositoryError, _>(|conn| {
            let mut value = load_live_value(conn, value_id)?;
            value.apply(updates);

            let attribute = validate_assignment(&value, conn)?;

            Ok(write_value(conn, &value)?.with_attribute(attribute))
        })
    }

    fn set_attribute_value(
        &self,
        value_id: i32,
        typed: &TypedValue,
        updated_by: Option<i32>,
    ) -> RepositoryResult<DomainAttributeValue> {
        let mut pooled = self.conn()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<DomainAttributeValue, RepositoryError, _>(|conn| {
            let mut value = load_live_value(conn, value_id)?;
            set_typed_value(&mut value, typed, conn)?;

            let attribute = validate_assignment(&value, conn)?;
            value.updated_by = updated_by.or(value.updated_by);
            value.updated_at = Utc::now().naive_utc();

            Ok(write_value(conn, &value)?.with_attribute(attribute))
        })
    }

    fn soft_delete_attribute_value(
        &self,
        value_id: i32,
        deleted_by: Option<i32>,
    ) -> RepositoryResult<()> {
        use crate::schema::sku_attribute_values;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            sku_attribute_values::table
                .find(value_id)
                .filter(sku_attribute_values::deleted_at.is_null()),
        )
        .set((
            sku_attribute_values::deleted_at.eq(Some(now)),
            sku_attribute_values::updated_at.eq(now),
            deleted_by.map(|user_id| sku_attribute_values::updated_by.eq(Some(user_id))),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
