use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::attribute::{NewAttribute, UpdateAttribute};
use crate::domain::attribute_type::{AttributeTypeError, validate_data_type};
use crate::forms::{double_option, sanitize_inline_text};

const NAME_MAX_LEN_VALIDATOR: u64 = 50;
const CODE_MAX_LEN_VALIDATOR: u64 = 64;
const UOM_MAX_LEN_VALIDATOR: u64 = 15;

pub type AttributeFormResult<T> = Result<T, AttributeFormError>;

#[derive(Debug, Error)]
pub enum AttributeFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("attribute name cannot be empty")]
    EmptyName,
    #[error("invalid attribute code `{0}`; use lowercase letters, digits, `_` or `-`")]
    InvalidCode(String),
    #[error(transparent)]
    DataType(#[from] AttributeTypeError),
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAttributeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = CODE_MAX_LEN_VALIDATOR))]
    pub code: String,
    /// One of `TEXT`, `NUMBER`, `BOOLEAN`, `DATE`.
    pub data_type: String,
    #[validate(length(max = UOM_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub uom: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateAttributeForm {
    pub fn into_new_attribute(self, actor_id: i32) -> AttributeFormResult<NewAttribute> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(AttributeFormError::EmptyName);
        }
        let code = sanitize_code(&self.code)?;
        let data_type = validate_data_type(self.data_type.trim())?;

        let mut attribute = NewAttribute::new(name, code, data_type).created_by(actor_id);
        if let Some(uom) = sanitize_uom(self.uom.as_deref()) {
            attribute = attribute.with_uom(uom);
        }
        if let Some(is_active) = self.is_active {
            attribute.is_active = is_active;
        }
        if let Some(sequence) = self.sequence {
            attribute = attribute.with_sequence(sequence);
        }

        Ok(attribute)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAttributeForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(min = 1, max = CODE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[validate(length(max = UOM_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "double_option")]
    pub uom: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateAttributeForm {
    pub fn into_update_attribute(self, actor_id: i32) -> AttributeFormResult<UpdateAttribute> {
        self.validate()?;

        let mut update = UpdateAttribute::new().updated_by(actor_id);

        if let Some(name) = self.name {
            let name = sanitize_inline_text(&name);
            if name.is_empty() {
                return Err(AttributeFormError::EmptyName);
            }
            update = update.name(name);
        }
        if let Some(code) = self.code {
            update = update.code(sanitize_code(&code)?);
        }
        if let Some(data_type) = self.data_type {
            update = update.data_type(validate_data_type(data_type.trim())?);
        }
        if let Some(uom) = self.uom {
            update = update.uom(sanitize_uom(uom.as_deref()));
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

fn sanitize_code(input: &str) -> AttributeFormResult<String> {
    let code = input.trim();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-');

    if valid {
        Ok(code.to_string())
    } else {
        Err(AttributeFormError::InvalidCode(code.to_string()))
    }
}

fn sanitize_uom(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|uom| !uom.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::domain::attribute_type::DataType;

    use super::*;

    #[test]
    fn create_form_parses_data_type_and_uom() {
        let form: CreateAttributeForm = serde_json::from_str(
            r#"{"name": "Memory", "code": "memory", "data_type": "NUMBER", "uom": " GB "}"#,
        )
        .expect("parse");

        let attribute = form.into_new_attribute(1).expect("valid form");

        assert_eq!(attribute.data_type, DataType::Number);
        assert_eq!(attribute.uom.as_deref(), Some("GB"));
        assert_eq!(attribute.code, "memory");
    }

    #[test]
    fn unknown_data_type_is_rejected() {
        let form: CreateAttributeForm = serde_json::from_str(
            r#"{"name": "Color", "code": "color", "data_type": "COLOR"}"#,
        )
        .expect("parse");

        assert!(matches!(
            form.into_new_attribute(1),
            Err(AttributeFormError::DataType(AttributeTypeError::InvalidDataType(value))) if value == "COLOR"
        ));
    }

    #[test]
    fn lowercase_data_type_is_rejected() {
        let form: CreateAttributeForm = serde_json::from_str(
            r#"{"name": "Color", "code": "color", "data_type": "text"}"#,
        )
        .expect("parse");

        assert!(form.into_new_attribute(1).is_err());
    }

    #[test]
    fn code_with_spaces_is_rejected() {
        assert!(matches!(
            sanitize_code("screen size"),
            Err(AttributeFormError::InvalidCode(_))
        ));
        assert_eq!(sanitize_code(" screen_size ").unwrap(), "screen_size");
    }

    #[test]
    fn update_form_can_clear_uom() {
        let form: UpdateAttributeForm = serde_json::from_str(r#"{"uom": null}"#).expect("parse");

        let update = form.into_update_attribute(3).expect("valid form");

        assert_eq!(update.uom, Some(None));
        assert_eq!(update.data_type, None);
    }
}
