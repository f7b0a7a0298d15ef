use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::attribute::Attribute;
use crate::domain::attribute_type::{AttributeTypeError, AttributeTyped, DataType, TypedValue};

/// Errors raised when binding a value to its attribute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeValueError {
    #[error("attribute {0} not found")]
    AttributeNotFound(i32),
    #[error("invalid value for attribute '{name}' (type: {data_type}): {source}")]
    InvalidValue {
        name: String,
        data_type: DataType,
        #[source]
        source: AttributeTypeError,
    },
}

/// Check `raw` against the declared type of `attribute`.
pub fn check_value(attribute: &Attribute, raw: &str) -> Result<(), AttributeValueError> {
    attribute
        .validate_value(raw)
        .map_err(|source| AttributeValueError::InvalidValue {
            name: attribute.name.clone(),
            data_type: attribute.data_type,
            source,
        })
}

/// `"{value} {uom}"` when the attribute has a unit, otherwise the raw value.
pub fn display_value(raw: &str, attribute: &Attribute) -> String {
    match attribute.unit() {
        Some(uom) => format!("{raw} {uom}"),
        None => raw.to_string(),
    }
}

/// Anything that stores a textual value for one attribute.
pub trait AttributeAssignment {
    fn attribute_id(&self) -> i32;
    fn raw_value(&self) -> &str;
    /// In-memory copy of the owning attribute, when one was loaded alongside.
    fn attached_attribute(&self) -> Option<&Attribute>;
}

/// Value of one attribute assigned to one SKU, stored as text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttributeValue {
    pub id: i32,
    pub sku_id: i32,
    pub attribute_id: i32,
    /// Raw text; must parse under the attribute's data type.
    pub value: String,
    /// Display ordering among the SKU's attributes.
    pub sequence: i32,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,
}

impl AttributeValue {
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Parse the stored text with the type of `attribute`.
    pub fn parsed_with(&self, attribute: &Attribute) -> Result<TypedValue, AttributeTypeError> {
        attribute.parse_value(&self.value)
    }

    pub fn display_with(&self, attribute: &Attribute) -> String {
        display_value(&self.value, attribute)
    }

    /// Format `value` with the type of `attribute` and store the result.
    pub fn set_value_with(
        &mut self,
        attribute: &Attribute,
        value: &TypedValue,
    ) -> Result<(), AttributeTypeError> {
        self.value = attribute.format_value(value)?;
        Ok(())
    }

    pub fn apply(&mut self, update: &UpdateAttributeValue) {
        if let Some(value) = &update.value {
            self.value = value.clone();
        }
        if let Some(sequence) = update.sequence {
            self.sequence = sequence;
        }
        self.updated_by = update.updated_by.or(self.updated_by);
        self.updated_at = update.updated_at;
    }
}

impl AttributeAssignment for AttributeValue {
    fn attribute_id(&self) -> i32 {
        self.attribute_id
    }

    fn raw_value(&self) -> &str {
        &self.value
    }

    fn attached_attribute(&self) -> Option<&Attribute> {
        self.attribute
            .as_ref()
            .filter(|attribute| attribute.id == self.attribute_id)
    }
}

/// Payload required to assign a value to a SKU.
#[derive(Debug, Clone)]
pub struct NewAttributeValue {
    pub sku_id: i32,
    pub attribute_id: i32,
    pub value: String,
    pub sequence: i32,
    pub created_by: Option<i32>,
    pub attribute: Option<Attribute>,
}

impl NewAttributeValue {
    pub fn new(sku_id: i32, attribute_id: i32, value: impl Into<String>) -> Self {
        Self {
            sku_id,
            attribute_id,
            value: value.into(),
            sequence: 0,
            created_by: None,
            attribute: None,
        }
    }

    pub fn with_sequence(mut self, sequence: i32) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Reuse an already loaded attribute instead of fetching it again.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }
}

impl AttributeAssignment for NewAttributeValue {
    fn attribute_id(&self) -> i32 {
        self.attribute_id
    }

    fn raw_value(&self) -> &str {
        &self.value
    }

    fn attached_attribute(&self) -> Option<&Attribute> {
        self.attribute
            .as_ref()
            .filter(|attribute| attribute.id == self.attribute_id)
    }
}

/// Patch data applied when updating an assigned value.
#[derive(Debug, Clone)]
pub struct UpdateAttributeValue {
    pub value: Option<String>,
    pub sequence: Option<i32>,
    pub updated_by: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateAttributeValue {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateAttributeValue {
    pub fn new() -> Self {
        Self {
            value: None,
            sequence: None,
            updated_by: None,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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

/// Assigned value rendered for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeValueView {
    #[serde(flatten)]
    pub value: AttributeValue,
    pub attribute_code: String,
    pub attribute_name: String,
    pub data_type: DataType,
    /// Raw value followed by the attribute's unit, if any.
    pub display_value: String,
    pub parsed_value: TypedValue,
}

impl AttributeValueView {
    /// Render `value` against `attribute`. A stored value that no longer parses
    /// (the attribute's type changed after the write) is kept as text.
    pub fn new(value: AttributeValue, attribute: &Attribute) -> Self {
        let parsed_value = match value.parsed_with(attribute) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!(
                    "Stored value #{} does not match attribute `{}`: {err}",
                    value.id,
                    attribute.code
                );
                TypedValue::Text(value.value.clone())
            }
        };
        let display_value = value.display_with(attribute);

        Self {
            value,
            attribute_code: attribute.code.clone(),
            attribute_name: attribute.name.clone(),
            data_type: attribute.data_type,
            display_value,
            parsed_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn attribute(id: i32, data_type: DataType, uom: Option<&str>) -> Attribute {
        Attribute {
            id,
            name: "RAM".to_string(),
            code: "ram".to_string(),
            data_type,
            uom: uom.map(str::to_string),
            created_by: None,
            updated_by: None,
            is_active: true,
            sequence: 0,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
            deleted_at: None,
        }
    }

    fn value(attribute_id: i32, raw: &str) -> AttributeValue {
        AttributeValue {
            id: 1,
            sku_id: 1,
            attribute_id,
            value: raw.to_string(),
            sequence: 0,
            created_by: None,
            updated_by: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
            deleted_at: None,
            attribute: None,
        }
    }

    #[test]
    fn display_appends_unit_when_present() {
        let ram = attribute(1, DataType::Number, Some("GB"));
        assert_eq!(value(1, "16").display_with(&ram), "16 GB");

        let plain = attribute(1, DataType::Number, None);
        assert_eq!(value(1, "16").display_with(&plain), "16");

        let blank = attribute(1, DataType::Number, Some(""));
        assert_eq!(value(1, "16").display_with(&blank), "16");
    }

    #[test]
    fn check_value_wraps_type_errors_with_attribute_details() {
        let ram = attribute(1, DataType::Number, Some("GB"));
        assert!(check_value(&ram, "16").is_ok());

        let err = check_value(&ram, "sixteen").expect_err("expected rejection");
        assert!(matches!(
            &err,
            AttributeValueError::InvalidValue { name, data_type: DataType::Number, .. } if name == "RAM"
        ));
        assert!(err.to_string().contains("type: NUMBER"));
    }

    #[test]
    fn set_value_formats_by_attribute_type() {
        let ram = attribute(1, DataType::Number, Some("GB"));
        let mut stored = value(1, "0");

        stored
            .set_value_with(&ram, &TypedValue::Integer(32))
            .expect("expected number to format");
        assert_eq!(stored.value, "32");
        assert_eq!(stored.parsed_with(&ram), Ok(TypedValue::Number(32.0)));

        let err = stored.set_value_with(&ram, &TypedValue::Boolean(true));
        assert!(matches!(err, Err(AttributeTypeError::Format { .. })));
        assert_eq!(stored.value, "32");
    }

    #[test]
    fn attached_attribute_must_match_reference() {
        let stale = value(2, "16").with_attribute(attribute(1, DataType::Number, None));
        assert!(stale.attached_attribute().is_none());

        let fresh = value(1, "16").with_attribute(attribute(1, DataType::Number, None));
        assert!(fresh.attached_attribute().is_some());
    }

    #[test]
    fn view_carries_display_and_parsed_values() {
        let ram = attribute(1, DataType::Number, Some("GB"));
        let view = AttributeValueView::new(value(1, "16"), &ram);
        assert_eq!(view.display_value, "16 GB");
        assert_eq!(view.parsed_value, TypedValue::Number(16.0));
        assert_eq!(view.attribute_code, "ram");
    }

    #[test]
    fn view_keeps_unparsable_value_as_text() {
        let ram = attribute(1, DataType::Number, Some("GB"));
        let view = AttributeValueView::new(value(1, "lots"), &ram);
        assert_eq!(view.parsed_value, TypedValue::Text("lots".to_string()));
        assert_eq!(view.display_value, "lots GB");
    }
}
