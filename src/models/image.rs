use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::image::{Image as DomainImage, ImageOwner, NewImage as DomainNewImage};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::images)]
pub struct Image {
    pub id: i32,
    pub file: String,
    pub title: Option<String>,
    pub is_primary: bool,
    pub imageable_id: i32,
    pub imageable_type: String,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage<'a> {
    pub file: &'a str,
    pub title: Option<&'a str>,
    pub is_primary: bool,
    pub imageable_id: i32,
    pub imageable_type: &'static str,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::images, treat_none_as_null = true)]
pub struct ImageChanges<'a> {
    pub file: &'a str,
    pub title: Option<&'a str>,
    pub is_primary: bool,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Image> for DomainImage {
    type Error = String;

    fn try_from(value: Image) -> Result<Self, Self::Error> {
        let owner = ImageOwner::from_parts(&value.imageable_type, value.imageable_id)
            .ok_or_else(|| format!("unknown imageable type `{}`", value.imageable_type))?;

        Ok(Self {
            id: value.id,
            file: value.file,
            title: value.title,
            is_primary: value.is_primary,
            owner,
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

impl<'a> From<&'a DomainNewImage> for NewImage<'a> {
    fn from(value: &'a DomainNewImage) -> Self {
        Self {
            file: value.file.as_str(),
            title: value.title.as_deref(),
            is_primary: value.is_primary,
            imageable_id: value.owner.imageable_id(),
            imageable_type: value.owner.imageable_type(),
            created_by: value.created_by,
            updated_by: value.created_by,
            is_active: value.is_active,
            sequence: value.sequence,
        }
    }
}

impl<'a> From<&'a DomainImage> for ImageChanges<'a> {
    fn from(value: &'a DomainImage) -> Self {
        Self {
            file: value.file.as_str(),
            title: value.title.as_deref(),
            is_primary: value.is_primary,
            updated_by: value.updated_by,
            is_active: value.is_active,
            sequence: value.sequence,
            updated_at: value.updated_at,
        }
    }
}
