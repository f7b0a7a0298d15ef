use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products, treat_none_as_null = true)]
pub struct ProductChanges<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub category_id: i32,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            category_id: value.category_id,
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

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            category_id: value.category_id,
            created_by: value.created_by,
            updated_by: value.created_by,
            is_active: value.is_active,
            sequence: value.sequence,
        }
    }
}

impl<'a> From<&'a DomainProduct> for ProductChanges<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            category_id: value.category_id,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            updated_at: value.updated_at,
        }
    }
}
