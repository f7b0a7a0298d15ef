use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::sku::{NewSku as DomainNewSku, Sku as DomainSku};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::skus)]
pub struct Sku {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sku_number: String,
    pub price_cents: i64,
    pub product_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::skus)]
pub struct NewSku<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub sku_number: &'a str,
    pub price_cents: i64,
    pub product_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::skus, treat_none_as_null = true)]
pub struct SkuChanges<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub sku_number: &'a str,
    pub price_cents: i64,
    pub product_id: i32,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Sku> for DomainSku {
    fn from(value: Sku) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            sku_number: value.sku_number,
            price_cents: value.price_cents,
            product_id: value.product_id,
            created_by: value.created_by,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            created_at: value.created_at,
            updated_at: value.updated_at,
            deleted_at: value.deleted_at,
        }
    }
}

impl<'a> From<&'a DomainNewSku> for NewSku<'a> {
    fn from(value: &'a DomainNewSku) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            sku_number: value.sku_number.as_str(),
            price_cents: value.price_cents,
            product_id: value.product_id,
            created_by: value.created_by,
            updated_by: value.created_by,
            is_active: value.is_active,
            sequence: value.sequence,
        }
    }
}

impl<'a> From<&'a DomainSku> for SkuChanges<'a> {
    fn from(value: &'a DomainSku) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            sku_number: value.sku_number.as_str(),
            price_cents: value.price_cents,
            product_id: value.product_id,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            updated_at: value.updated_at,
        }
    }
}
