use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::attribute_type::TypedValue;
use crate::domain::attribute_value::{NewAttributeValue, UpdateAttributeValue};

const VALUE_MAX_LEN: usize = 1024;

pub type AttributeValueFormResult<T> = Result<T, AttributeValueFormError>;

#[derive(Debug, Error)]
pub enum AttributeValueFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("attribute value is longer than {VALUE_MAX_LEN} characters")]
    ValueTooLong,
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: i32 },
}

/// JSON scalar accepted as an attribute value.
///
/// Variant order matters for untagged matching: integers are tried before
/// floats so `16` stays exact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl ValueInput {
    pub fn into_typed(self) -> TypedValue {
        match self {
            ValueInput::Boolean(flag) => TypedValue::Boolean(flag),
            ValueInput::Integer(number) => TypedValue::Integer(number),
            ValueInput::Number(number) => TypedValue::Number(number),
            ValueInput::Text(text) => TypedValue::Text(text.trim().to_string()),
        }
    }

    /// Storage text for the value. Whether it is acceptable (an empty
    /// string included) is decided by the attribute's type when written.
    fn into_raw(self) -> AttributeValueFormResult<String> {
        let raw = self.into_typed().to_string();
        if raw.chars().count() > VALUE_MAX_LEN {
            return Err(AttributeValueFormError::ValueTooLong);
        }
        Ok(raw)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAttributeValueForm {
    #[validate(range(min = 1))]
    pub attribute_id: i32,
    pub value: ValueInput,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateAttributeValueForm {
    pub fn into_new_attribute_value(
        self,
        sku_id: i32,
        actor_id: i32,
    ) -> AttributeValueFormResult<NewAttributeValue> {
        self.validate()?;
        if sku_id <= 0 {
            return Err(AttributeValueFormError::InvalidIdentifier {
                field: "sku id",
                value: sku_id,
            });
        }

        let mut new_value =
            NewAttributeValue::new(sku_id, self.attribute_id, self.value.into_raw()?)
                .created_by(actor_id);
        if let Some(sequence) = self.sequence {
            new_value = new_value.with_sequence(sequence);
        }

        Ok(new_value)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAttributeValueForm {
    #[serde(default)]
    pub value: Option<ValueInput>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateAttributeValueForm {
    pub fn into_update_attribute_value(
        self,
        actor_id: i32,
    ) -> AttributeValueFormResult<UpdateAttributeValue> {
        let mut update = UpdateAttributeValue::new().updated_by(actor_id);

        if let Some(value) = self.value {
            update = update.value(value.into_raw()?);
        }
        if let Some(sequence) = self.sequence {
            update = update.sequence(sequence);
        }

        Ok(update)
    }
}

/// Body of the typed "set value" endpoint; the attribute's data type
/// decides how the value is formatted for storage.
#[derive(Debug, Deserialize)]
pub struct SetAttributeValueForm {
    pub value: ValueInput,
}

impl SetAttributeValueForm {
    pub fn into_typed_value(self) -> TypedValue {
        self.value.into_typed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_scalars_map_to_typed_values() {
        let cases = [
            (r#"{"value": true}"#, TypedValue::Boolean(true)),
            (r#"{"value": 16}"#, TypedValue::Integer(16)),
            (r#"{"value": 15.6}"#, TypedValue::Number(15.6)),
            (r#"{"value": " 2024-01-15 "}"#, TypedValue::Text("2024-01-15".to_string())),
        ];

        for (body, expected) in cases {
            let form: SetAttributeValueForm = serde_json::from_str(body).expect("parse");
            assert_eq!(form.into_typed_value(), expected);
        }
    }

    #[test]
    fn create_form_stores_raw_text() {
        let form: CreateAttributeValueForm =
            serde_json::from_str(r#"{"attribute_id": 4, "value": 16}"#).expect("parse");

        let new_value = form.into_new_attribute_value(2, 1).expect("valid form");

        assert_eq!(new_value.value, "16");
        assert_eq!(new_value.sku_id, 2);
        assert_eq!(new_value.attribute_id, 4);
        assert_eq!(new_value.created_by, Some(1));
    }

    #[test]
    fn blank_text_is_left_to_the_attribute_type() {
        let blank: CreateAttributeValueForm =
            serde_json::from_str(r#"{"attribute_id": 4, "value": "  "}"#).expect("parse");
        let new_value = blank.into_new_attribute_value(2, 1).expect("blank text");
        assert_eq!(new_value.value, "");

        let update: UpdateAttributeValueForm =
            serde_json::from_str(r#"{"value": ""}"#).expect("parse");
        let update = update.into_update_attribute_value(1).expect("empty update");
        assert_eq!(update.value.as_deref(), Some(""));
    }

    #[test]
    fn create_form_rejects_long_value_and_bad_attribute() {
        let long = format!(r#"{{"attribute_id": 4, "value": "{}"}}"#, "x".repeat(1025));
        let long: CreateAttributeValueForm = serde_json::from_str(&long).expect("parse");
        assert!(matches!(
            long.into_new_attribute_value(2, 1),
            Err(AttributeValueFormError::ValueTooLong)
        ));

        let bad_attribute: CreateAttributeValueForm =
            serde_json::from_str(r#"{"attribute_id": 0, "value": "x"}"#).expect("parse");
        assert!(matches!(
            bad_attribute.into_new_attribute_value(2, 1),
            Err(AttributeValueFormError::Validation(_))
        ));
    }
}
