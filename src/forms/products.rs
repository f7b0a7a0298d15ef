use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, ProductListQuery, UpdateProduct};
use crate::forms::{double_option, optional_multiline, sanitize_inline_text};
use crate::pagination::{PageParams, Pagination};

const NAME_MAX_LEN: usize = 150;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;
const DESCRIPTION_MAX_LEN: usize = 4096;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = DESCRIPTION_MAX_LEN as u64;

pub type ProductFormResult<T> = Result<T, ProductFormError>;

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("product name cannot be empty")]
    EmptyName,
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: i32 },
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: i32,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateProductForm {
    pub fn into_new_product(self, actor_id: i32) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }
        let category_id = positive_id(self.category_id, "category id")?;

        let mut new_product = NewProduct::new(name, category_id).created_by(actor_id);
        if let Some(description) = optional_multiline(self.description.as_deref()) {
            new_product = new_product.with_description(description);
        }
        if let Some(is_active) = self.is_active {
            new_product.is_active = is_active;
        }
        if let Some(sequence) = self.sequence {
            new_product = new_product.with_sequence(sequence);
        }

        Ok(new_product)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateProductForm {
    pub fn into_update_product(self, actor_id: i32) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut update = UpdateProduct::new().updated_by(actor_id);

        if let Some(name) = self.name {
            let name = sanitize_inline_text(&name);
            if name.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            update = update.name(name);
        }
        if let Some(description) = self.description {
            update = update.description(optional_multiline(description.as_deref()));
        }
        if let Some(category_id) = self.category_id {
            update = update.category_id(positive_id(category_id, "category id")?);
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

#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    pub search: Option<String>,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub include_deleted: bool,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ProductListParams {
    pub fn pagination(&self) -> Pagination {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
        .normalize()
    }

    pub fn into_query(self) -> ProductListQuery {
        let mut query = ProductListQuery::new().paginate(self.pagination());

        if let Some(search) = self
            .search
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|search| !search.is_empty())
        {
            query = query.search(search);
        }
        if let Some(category_id) = self.category_id {
            query = query.category(category_id);
        }
        if self.include_deleted {
            query = query.include_deleted();
        }

        query
    }
}

fn positive_id(value: i32, field: &'static str) -> ProductFormResult<i32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ProductFormError::InvalidIdentifier { field, value })
    }
}
