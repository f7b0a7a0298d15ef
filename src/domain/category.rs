use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::{SlugNamespace, Sluggable};
use crate::pagination::Pagination;

/// Domain representation of a hierarchical product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    /// Optional description that expands upon the category name.
    pub description: Option<String>,
    /// Optional identifier of the parent category when building a tree.
    pub parent_id: Option<i32>,
    /// User that created the record.
    pub created_by: Option<i32>,
    /// User that last changed the record.
    pub updated_by: Option<i32>,
    /// Whether the category is visible in the catalog.
    pub is_active: bool,
    /// Display ordering among siblings.
    pub sequence: i32,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
    /// Set once the category has been soft deleted.
    pub deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Apply a patch in memory; the slug is left for the repository to refresh.
    pub fn apply(&mut self, update: &UpdateCategory) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(parent_id) = update.parent_id {
            self.parent_id = parent_id;
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

impl Sluggable for Category {
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
        SlugNamespace::Categories
    }
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Filled in by the repository right before the insert.
    pub slug: String,
    /// Optional description that expands upon the category name.
    pub description: Option<String>,
    /// Optional identifier of the parent category when building a tree.
    pub parent_id: Option<i32>,
    /// User creating the category.
    pub created_by: Option<i32>,
    /// Whether the category starts out visible.
    pub is_active: bool,
    /// Display ordering among siblings.
    pub sequence: i32,
}

impl NewCategory {
    /// Build a new active category payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: String::new(),
            description: None,
            parent_id: None,
            created_by: None,
            is_active: true,
            sequence: 0,
        }
    }

    /// Attach a parent identifier to the category payload.
    pub fn with_parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Attach a descriptive text to the category payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Record the user creating the category.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub fn with_sequence(mut self, sequence: i32) -> Self {
        self.sequence = sequence;
        self
    }
}

impl Sluggable for NewCategory {
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
        SlugNamespace::Categories
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Optional name update; a changed name regenerates the slug.
    pub name: Option<String>,
    /// Optional description update, `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// Optional parent update, `Some(None)` turns the category into a root.
    pub parent_id: Option<Option<i32>>,
    /// Optional visibility toggle.
    pub is_active: Option<bool>,
    /// Optional display ordering update.
    pub sequence: Option<i32>,
    /// User applying the patch.
    pub updated_by: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateCategory {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCategory {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            parent_id: None,
            is_active: None,
            sequence: None,
            updated_by: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = Some(parent_id);
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

/// Query definition used to list categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Optional substring search applied to category names.
    pub search: Option<String>,
    /// Only return direct children of this category.
    pub parent_id: Option<i32>,
    /// Only return categories without a parent.
    pub root_only: bool,
    /// Whether soft deleted categories should be included in the results.
    pub include_deleted: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter results by a search term applied to the name.
    pub fn search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }

    /// Restrict results to the children of `parent_id`.
    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Restrict results to root categories.
    pub fn root_only(mut self) -> Self {
        self.root_only = true;
        self
    }

    /// Include soft deleted categories in the results.
    pub fn include_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Node representation of a category and its children for tree traversal.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategoryTreeNode {
    /// Category data represented by this node.
    #[serde(flatten)]
    pub category: Category,
    /// Children that belong to this node.
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    /// Create a new category tree node with no children.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }

    /// Attach a collection of children to the node.
    pub fn with_children(mut self, children: impl Into<Vec<CategoryTreeNode>>) -> Self {
        self.children = children.into();
        self
    }
}
