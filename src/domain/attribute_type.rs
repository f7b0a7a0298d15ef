//! Dynamic typing for attribute values.
//!
//! Attribute values are persisted as text. [`DataType`] declares how that text
//! is interpreted, and [`TypedValue`] is the in-memory form produced by
//! [`DataType::parse_value`] and consumed by [`DataType::format_value`].

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage format produced for dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date layouts accepted on input, tried in order.
const DATE_INPUT_FORMATS: [DateLayout; 5] = [
    DateLayout::Date("%Y-%m-%d"),
    DateLayout::DateTime("%Y-%m-%d %H:%M:%S"),
    DateLayout::Rfc3339,
    DateLayout::Date("%d/%m/%Y"),
    DateLayout::Date("%m/%d/%Y"),
];

#[derive(Debug, Clone, Copy)]
enum DateLayout {
    Date(&'static str),
    DateTime(&'static str),
    Rfc3339,
}

impl DateLayout {
    /// Parse `raw` in this exact layout.
    ///
    /// chrono accepts unpadded fields, a signed year and leading blanks, so
    /// the parsed value must format back to `raw` unchanged.
    fn parse(self, raw: &str) -> Result<NaiveDateTime, DateParseError> {
        match self {
            DateLayout::Date(format) => {
                let date = NaiveDate::parse_from_str(raw, format)?;
                if date.format(format).to_string() != raw {
                    return Err(DateParseError::Layout(format));
                }
                Ok(date.and_time(NaiveTime::MIN))
            }
            DateLayout::DateTime(format) => {
                let datetime = NaiveDateTime::parse_from_str(raw, format)?;
                if datetime.format(format).to_string() != raw {
                    return Err(DateParseError::Layout(format));
                }
                Ok(datetime)
            }
            DateLayout::Rfc3339 => Ok(DateTime::parse_from_rfc3339(raw)?.naive_utc()),
        }
    }
}

/// Why a date did not match one layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateParseError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
    #[error("does not match `{0}` exactly")]
    Layout(&'static str),
}

/// Errors raised while interpreting attribute values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeTypeError {
    #[error("invalid data type `{0}`; valid types are TEXT, NUMBER, BOOLEAN, DATE")]
    InvalidDataType(String),
    #[error("invalid number `{value}`: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("invalid boolean `{0}`")]
    InvalidBoolean(String),
    #[error("invalid date format `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: DateParseError,
    },
    #[error("cannot format {value} as {data_type}")]
    Format { data_type: DataType, value: String },
}

/// Declared type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Text,
    Number,
    Boolean,
    Date,
}

impl DataType {
    pub const ALL: [DataType; 4] = [
        DataType::Text,
        DataType::Number,
        DataType::Boolean,
        DataType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Text => "TEXT",
            DataType::Number => "NUMBER",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
        }
    }

    /// Parse stored text according to this type.
    pub fn parse_value(&self, raw: &str) -> Result<TypedValue, AttributeTypeError> {
        match self {
            DataType::Text => Ok(TypedValue::Text(raw.to_string())),
            DataType::Number => raw.parse::<f64>().map(TypedValue::Number).map_err(|source| {
                AttributeTypeError::InvalidNumber {
                    value: raw.to_string(),
                    source,
                }
            }),
            DataType::Boolean => parse_bool(raw)
                .map(TypedValue::Boolean)
                .ok_or_else(|| AttributeTypeError::InvalidBoolean(raw.to_string())),
            DataType::Date => parse_date(raw).map(TypedValue::Date),
        }
    }

    /// Render a typed value into its storage text.
    pub fn format_value(&self, value: &TypedValue) -> Result<String, AttributeTypeError> {
        match (self, value) {
            (DataType::Text, TypedValue::Text(text)) => Ok(text.clone()),
            (DataType::Text, other) => Ok(other.to_string()),
            (DataType::Number, TypedValue::Integer(number)) => Ok(number.to_string()),
            (DataType::Number, TypedValue::Number(number)) => Ok(format!("{number:.2}")),
            (DataType::Boolean, TypedValue::Boolean(flag)) => Ok(flag.to_string()),
            (DataType::Date, TypedValue::Date(date)) => Ok(date.format(DATE_FORMAT).to_string()),
            (DataType::Date, TypedValue::Text(text)) => {
                match DateLayout::Date(DATE_FORMAT).parse(text) {
                    Ok(_) => Ok(text.clone()),
                    Err(_) => Err(self.format_error(value)),
                }
            }
            _ => Err(self.format_error(value)),
        }
    }

    /// Check that `raw` parses under this type.
    pub fn validate_value(&self, raw: &str) -> Result<(), AttributeTypeError> {
        self.parse_value(raw).map(|_| ())
    }

    fn format_error(&self, value: &TypedValue) -> AttributeTypeError {
        AttributeTypeError::Format {
            data_type: *self,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = AttributeTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_data_type(value)
    }
}

/// Accept exactly one of the four recognised type names.
pub fn validate_data_type(value: &str) -> Result<DataType, AttributeTypeError> {
    DataType::ALL
        .into_iter()
        .find(|data_type| data_type.as_str() == value)
        .ok_or_else(|| AttributeTypeError::InvalidDataType(value.to_string()))
}

/// In-memory form of an attribute value.
///
/// `Integer` only appears on the write side; parsing a NUMBER always yields
/// `Number`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDateTime),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Text(text) => f.write_str(text),
            TypedValue::Integer(number) => write!(f, "{number}"),
            TypedValue::Number(number) => write!(f, "{number}"),
            TypedValue::Boolean(flag) => write!(f, "{flag}"),
            TypedValue::Date(date) => write!(f, "{date}"),
        }
    }
}

/// Capability to interpret attribute text by a declared [`DataType`].
///
/// Usable without any storage, e.g. to reject a request before a write.
pub trait AttributeTyped {
    fn data_type(&self) -> DataType;

    fn parse_value(&self, raw: &str) -> Result<TypedValue, AttributeTypeError> {
        self.data_type().parse_value(raw)
    }

    fn format_value(&self, value: &TypedValue) -> Result<String, AttributeTypeError> {
        self.data_type().format_value(value)
    }

    fn validate_value(&self, raw: &str) -> Result<(), AttributeTypeError> {
        self.data_type().validate_value(raw)
    }
}

impl AttributeTyped for DataType {
    fn data_type(&self) -> DataType {
        *self
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDateTime, AttributeTypeError> {
    let [first, rest @ ..] = DATE_INPUT_FORMATS;
    rest.iter()
        .fold(first.parse(raw), |parsed, layout| {
            parsed.or_else(|_| layout.parse(raw))
        })
        .map_err(|source| AttributeTypeError::InvalidDate {
            value: raw.to_string(),
            source,
        })
}
