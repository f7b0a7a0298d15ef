use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::attribute::{Attribute as DomainAttribute, NewAttribute as DomainNewAttribute};
use crate::domain::attribute_type::{AttributeTypeError, DataType};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::attributes)]
pub struct Attribute {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub data_type: String,
    pub uom: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::attributes)]
pub struct NewAttribute<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub data_type: &'static str,
    pub uom: Option<&'a str>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::attributes, treat_none_as_null = true)]
pub struct AttributeChanges<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub data_type: &'static str,
    pub uom: Option<&'a str>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub updated_at: NaiveDateTime,
}

/// The stored data type is re-validated on the way out so a row edited by
/// hand cannot smuggle an unknown kind into the type engine.
impl TryFrom<Attribute> for DomainAttribute {
    type Error = AttributeTypeError;

    fn try_from(value: Attribute) -> Result<Self, Self::Error> {
        let data_type = value.data_type.parse::<DataType>()?;

        Ok(Self {
            id: value.id,
            name: value.name,
            code: value.code,
            data_type,
            uom: value.uom,
            created_by: value.created_by,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
        })
    }
}

impl<'a> From<&'a DomainNewAttribute> for NewAttribute<'a> {
    fn from(value: &'a DomainNewAttribute) -> Self {
        Self {
            name: value.name.as_str(),
            code: value.code.as_str(),
            data_type: value.data_type.as_str(),
            uom: value.uom.as_deref(),
            created_by: value.created_by,
            updated_by: value.created_by,
            is_active: value.is_active,
            sequence: value.sequence,
        }
    }
}

impl<'a> From<&'a DomainAttribute> for AttributeChanges<'a> {
    fn from(value: &'a DomainAttribute) -> Self {
        Self {
            name: value.name.as_str(),
            code: value.code.as_str(),
            data_type: value.data_type.as_str(),
            uom: value.uom.as_deref(),
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            updated_at: value.updated_at,
        }
    }
}
