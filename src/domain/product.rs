use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::{SlugNamespace, Sluggable};
use crate::pagination::Pagination;

/// Domain representation of a product grouping one or more SKUs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Category the product is listed under.
    pub category_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Product {
    /// Apply a patch in memory; the slug is left for the repository to refresh.
    pub fn apply(&mut self, update: &UpdateProduct) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(sequence) = update.sequence {
            self.sequence = sequence;
        }
        self.updated_by = update.updated_by.or(self.updated_by);
        self.updated_at = update.updated_at;
    }
}

impl Sluggable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn id(&self) -> Option<i32> {
        Some(self.id)
    }

    fn namespace(&self) -> SlugNamespace {
        SlugNamespace::Products
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    /// Filled in by the repository right before the insert.
    pub slug: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

impl NewProduct {
    /// Build a new active product payload.
    pub fn new(name: impl Into<String>, category_id: i32) -> Self {
        Self {
            name: name.into(),
            slug: String::new(),
            description: None,
            category_id,
            created_by: None,
            is_active: true,
            sequence: 0,
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub fn with_sequence(mut self, sequence: i32) -> Self {
        self.sequence = sequence;
        self
    }
}

impl Sluggable for NewProduct {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }

    fn id(&self) -> Option<i32> {
        None
    }

    fn namespace(&self) -> SlugNamespace {
        SlugNamespace::Products
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update; a changed name regenerates the slug.
    pub name: Option<String>,
    /// Optional description update, `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// Optional move to another category.
    pub category_id: Option<i32>,
    pub is_active: Option<bool>,
    pub sequence: Option<i32>,
    pub updated_by: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            category_id: None,
            is_active: None,
            sequence: None,
            updated_by: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn sequence(mut self, sequence: i32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn updated_by(mut self, user_id: i32) -> Self {
        self.updated_by = Some(user_id);
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name search term.
    pub search: Option<String>,
    /// Only return products of this category.
    pub category_id: Option<i32>,
    /// Whether soft deleted products should be included in the results.
    pub include_deleted: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn include_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}
