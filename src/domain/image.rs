use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record an image belongs to, stored as an `imageable_type` + `imageable_id` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ImageOwner {
    Product(i32),
    Sku(i32),
}

impl ImageOwner {
    pub const PRODUCTS: &'static str = "products";
    pub const SKUS: &'static str = "skus";

    pub fn imageable_type(&self) -> &'static str {
        match self {
            ImageOwner::Product(_) => Self::PRODUCTS,
            ImageOwner::Sku(_) => Self::SKUS,
        }
    }

    pub fn imageable_id(&self) -> i32 {
        match self {
            ImageOwner::Product(id) | ImageOwner::Sku(id) => *id,
        }
    }

    /// Rebuild the owner from its stored columns.
    pub fn from_parts(imageable_type: &str, imageable_id: i32) -> Option<Self> {
        match imageable_type {
            Self::PRODUCTS => Some(ImageOwner::Product(imageable_id)),
            Self::SKUS => Some(ImageOwner::Sku(imageable_id)),
            _ => None,
        }
    }
}

/// Image attached to a product or a SKU. At most one image per owner is primary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Image {
    pub id: i32,
    /// Path or URL of the stored file.
    pub file: String,
    pub title: Option<String>,
    pub is_primary: bool,
    pub owner: ImageOwner,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Image {
    pub fn apply(&mut self, update: &UpdateImage) {
        if let Some(file) = &update.file {
            self.file = file.clone();
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(is_primary) = update.is_primary {
            self.is_primary = is_primary;
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

/// Payload required to attach a new image.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub file: String,
    pub title: Option<String>,
    pub is_primary: bool,
    pub owner: ImageOwner,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

impl NewImage {
    pub fn new(file: impl Into<String>, owner: ImageOwner) -> Self {
        Self {
            file: file.into(),
            title: None,
            is_primary: false,
            owner,
            created_by: None,
            is_active: true,
            sequence: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Mark the image as the owner's primary image.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
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

/// Patch data applied when updating an image.
#[derive(Debug, Clone)]
pub struct UpdateImage {
    pub file: Option<String>,
    pub title: Option<Option<String>>,
    pub is_primary: Option<bool>,
    pub is_active: Option<bool>,
    pub sequence: Option<i32>,
    pub updated_by: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateImage {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateImage {
    pub fn new() -> Self {
        Self {
            file: None,
            title: None,
            is_primary: None,
            is_active: None,
            sequence: None,
            updated_by: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = Some(title.map(|value| value.into()));
        self
    }

    pub fn primary(mut self, is_primary: bool) -> Self {
        self.is_primary = Some(is_primary);
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
