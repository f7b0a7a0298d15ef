use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::{SlugNamespace, Sluggable};
use crate::pagination::Pagination;

/// Sellable variant of a product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sku {
    /// Unique identifier of the SKU.
    pub id: i32,
    /// Human-readable name of the SKU.
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    pub description: Option<String>,
    /// Merchant stock keeping number, unique across the catalog.
    pub sku_number: String,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// Product the SKU is a variant of.
    pub product_id: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Sku {
    /// Apply a patch in memory; the slug is left for the repository to refresh.
    pub fn apply(&mut self, update: &UpdateSku) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(sku_number) = &update.sku_number {
            self.sku_number = sku_number.clone();
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        if let Some(product_id) = update.product_id {
            self.product_id = product_id;
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

impl Sluggable for Sku {
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
        SlugNamespace::Skus
    }
}

/// Payload required to insert a new SKU.
#[derive(Debug, Clone)]
pub struct NewSku {
    pub name: String,
    /// Filled in by the repository right before the insert.
    pub slug: String,
    pub description: Option<String>,
    pub sku_number: String,
    pub price_cents: i64,
    pub product_id: i32,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

impl NewSku {
    /// Build a new active SKU payload.
    pub fn new(
        name: impl Into<String>,
        sku_number: impl Into<String>,
        price_cents: i64,
        product_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            slug: String::new(),
            description: None,
            sku_number: sku_number.into(),
            price_cents,
            product_id,
            created_by: None,
            is_active: true,
            sequence: 0,
        }
    }

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

impl Sluggable for NewSku {
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
        SlugNamespace::Skus
    }
}

/// Patch data applied when updating an existing SKU.
#[derive(Debug, Clone)]
pub struct UpdateSku {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub sku_number: Option<String>,
    pub price_cents: Option<i64>,
    pub product_id: Option<i32>,
    pub is_active: Option<bool>,
    pub sequence: Option<i32>,
    pub updated_by: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateSku {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateSku {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            sku_number: None,
            price_cents: None,
            product_id: None,
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

    pub fn sku_number(mut self, sku_number: impl Into<String>) -> Self {
        self.sku_number = Some(sku_number.into());
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
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

/// Query definition used to list SKUs.
#[derive(Debug, Clone, Default)]
pub struct SkuListQuery {
    /// Optional name search term.
    pub search: Option<String>,
    /// Only return SKUs of this product.
    pub product_id: Option<i32>,
    /// Optional exact SKU number filter.
    pub sku_number: Option<String>,
    pub include_deleted: bool,
    pub pagination: Option<Pagination>,
}

impl SkuListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Filter the results by an exact SKU number match.
    pub fn sku_number(mut self, sku_number: impl Into<String>) -> Self {
        self.sku_number = Some(sku_number.into());
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
