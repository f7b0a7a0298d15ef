use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{CategoryListQuery, NewCategory, UpdateCategory};
use crate::forms::{double_option, optional_multiline, sanitize_inline_text};
use crate::pagination::{PageParams, Pagination};

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: usize = 100;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum length allowed for a category description.
const DESCRIPTION_MAX_LEN: usize = 2048;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
    /// Supplied identifier field is not a positive id.
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: i32 },
}

/// Payload accepted when creating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self, actor_id: i32) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let mut new_category = NewCategory::new(name).created_by(actor_id);
        if let Some(description) = optional_multiline(self.description.as_deref()) {
            new_category = new_category.with_description(description);
        }
        if let Some(parent_id) = self.parent_id {
            new_category = new_category.with_parent_id(positive_id(parent_id, "parent id")?);
        }
        if let Some(is_active) = self.is_active {
            new_category.is_active = is_active;
        }
        if let Some(sequence) = self.sequence {
            new_category = new_category.with_sequence(sequence);
        }

        Ok(new_category)
    }
}

/// Partial update payload; absent fields stay untouched, `null` clears.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i32>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateCategoryForm {
    pub fn into_update_category(self, actor_id: i32) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let mut update = UpdateCategory::new().updated_by(actor_id);

        if let Some(name) = self.name {
            let name = sanitize_inline_text(&name);
            if name.is_empty() {
                return Err(CategoryFormError::EmptyName);
            }
            update = update.name(name);
        }
        if let Some(description) = self.description {
            update = update.description(optional_multiline(description.as_deref()));
        }
        if let Some(parent_id) = self.parent_id {
            let parent_id = parent_id
                .map(|id| positive_id(id, "parent id"))
                .transpose()?;
            update = update.parent_id(parent_id);
        }
        if let Some(is_active) = self.is_active {
            update = update.active(is_active);
        }
        if let Some(sequence) = self.sequence {
            update = update.sequence(sequence);
        }

        Ok(update)
    }
}

/// Query string accepted by the category list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryListParams {
    /// Substring matched against name and description.
    pub name: Option<String>,
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub root_only: bool,
    #[serde(default)]
    pub include_deleted: bool,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl CategoryListParams {
    pub fn pagination(&self) -> Pagination {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
        .normalize()
    }

    pub fn into_query(self) -> CategoryListQuery {
        let mut query = CategoryListQuery::new().paginate(self.pagination());

        if let Some(name) = self
            .name
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|name| !name.is_empty())
        {
            query = query.search(name);
        }
        if let Some(parent_id) = self.parent_id {
            query = query.parent(parent_id);
        } else if self.root_only {
            query = query.root_only();
        }
        if self.include_deleted {
            query = query.include_deleted();
        }

        query
    }
}

fn positive_id(value: i32, field: &'static str) -> CategoryFormResult<i32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CategoryFormError::InvalidIdentifier { field, value })
    }
}
