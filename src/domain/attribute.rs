use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::attribute_type::{AttributeTyped, DataType};
use crate::pagination::Pagination;

/// Named, coded and typed field that can be attached to SKUs, e.g. "RAM" in GB.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attribute {
    /// Unique identifier of the attribute.
    pub id: i32,
    /// Display label.
    pub name: String,
    /// Unique machine key.
    pub code: String,
    /// How values of this attribute are interpreted.
    pub data_type: DataType,
    /// Optional unit of measurement appended when displaying values.
    pub uom: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Attribute {
    /// Unit of measurement when one is set and not blank.
    pub fn unit(&self) -> Option<&str> {
        self.uom.as_deref().filter(|uom| !uom.is_empty())
    }

    pub fn apply(&mut self, update: &UpdateAttribute) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(code) = &update.code {
            self.code = code.clone();
        }
        if let Some(data_type) = update.data_type {
            self.data_type = data_type;
        }
        if let Some(uom) = &update.uom {
            self.uom = uom.clone();
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

impl AttributeTyped for Attribute {
    fn data_type(&self) -> DataType {
        self.data_type
    }
}

/// Payload required to insert a new attribute.
#[derive(Debug, Clone)]
pub struct NewAttribute {
    pub name: String,
    pub code: String,
    pub data_type: DataType,
    pub uom: Option<String>,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub sequence: i32,
}

impl NewAttribute {
    pub fn new(name: impl Into<String>, code: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            data_type,
            uom: None,
            created_by: None,
            is_active: true,
            sequence: 0,
        }
    }

    /// Attach a unit of measurement, e.g. `GB`.
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        self.uom = Some(uom.into());
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

/// Patch data applied when updating an existing attribute.
#[derive(Debug, Clone)]
pub struct UpdateAttribute {
    pub name: Option<String>,
    pub code: Option<String>,
    pub data_type: Option<DataType>,
    /// Optional unit update, `Some(None)` clears it.
    pub uom: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub sequence: Option<i32>,
    pub updated_by: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateAttribute {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateAttribute {
    pub fn new() -> Self {
        Self {
            name: None,
            code: None,
            data_type: None,
            uom: None,
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

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn uom(mut self, uom: Option<impl Into<String>>) -> Self {
        self.uom = Some(uom.map(|value| value.into()));
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

/// Query definition used to list attributes.
#[derive(Debug, Clone, Default)]
pub struct AttributeListQuery {
    /// Optional search applied to name and code.
    pub search: Option<String>,
    pub include_deleted: bool,
    pub pagination: Option<Pagination>,
}

impl AttributeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
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
