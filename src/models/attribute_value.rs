use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::attribute_value::{
    AttributeValue as DomainAttributeValue, NewAttributeValue as DomainNewAttributeValue,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sku_attribute_values)]
pub struct AttributeValue {
    pub id: i32,
    pub sku_id: i32,
    pub attribute_id: i32,
    pub value: String,
    pub sequence: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sku_attribute_values)]
pub struct NewAttributeValue<'a> {
    pub sku_id: i32,
    pub attribute_id: i32,
    pub value: &'a str,
    pub sequence: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sku_attribute_values, treat_none_as_null = true)]
pub struct AttributeValueChanges<'a> {
    pub value: &'a str,
    pub sequence: i32,
    pub updated_by: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<AttributeValue> for DomainAttributeValue {
    fn from(value: AttributeValue) -> Self {
        Self {
            id: value.id,
            sku_id: value.sku_id,
            attribute_id: value.attribute_id,
            value: value.value,
            sequence: value.sequence,
            created_by: value.created_by,
            updated_by: value.updated_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
            attribute: None,
        }
    }
}

impl<'a> From<&'a DomainNewAttributeValue> for NewAttributeValue<'a> {
    fn from(value: &'a DomainNewAttributeValue) -> Self {
        Self {
            sku_id: value.sku_id,
            attribute_id: value.attribute_id,
            value: value.value.as_str(),
            sequence: value.sequence,
            created_by: value.created_by,
            updated_by: value.created_by,
        }
    }
}

impl<'a> From<&'a DomainAttributeValue> for AttributeValueChanges<'a> {
    fn from(value: &'a DomainAttributeValue) -> Self {
        Self {
            value: value.value.as_str(),
            sequence: value.sequence,
            updated_by: value.updated_by,
            updated_at: value.updated_at,
        }
    }
}
