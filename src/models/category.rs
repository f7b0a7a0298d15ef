use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub parent_id: Option<i32>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

/// Full set of mutable columns written back after a patch has been applied.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories, treat_none_as_null = true)]
pub struct CategoryChanges<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub parent_id: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            parent_id: value.parent_id,
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

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            parent_id: value.parent_id,
            created_by: value.created_by,
            updated_by: value.created_by,
            is_active: value.is_active,
            sequence: value.sequence,
        }
    }
}

impl<'a> From<&'a DomainCategory> for CategoryChanges<'a> {
    fn from(value: &'a DomainCategory) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            parent_id: value.parent_id,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            updated_at: value.updated_at,
        }
    }
}
