use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::sku::{NewSku, SkuListQuery, UpdateSku};
use crate::forms::{double_option, optional_multiline, sanitize_inline_text};
use crate::pagination::{PageParams, Pagination};

const NAME_MAX_LEN: usize = 200;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;
const SKU_MAX_LEN: usize = 50;
const SKU_MAX_LEN_VALIDATOR: u64 = SKU_MAX_LEN as u64;
const DESCRIPTION_MAX_LEN_VALIDATOR: u64 = 4096;

pub type SkuFormResult<T> = Result<T, SkuFormError>;

#[derive(Debug, Error)]
pub enum SkuFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("SKU name cannot be empty")]
    EmptyName,
    #[error("SKU number cannot be empty")]
    EmptySkuNumber,
    #[error("invalid price `{0}`")]
    InvalidPrice(String),
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: i32 },
}

/// Price as sent by clients: either a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Convert to integer cents, rejecting negatives and sub-cent precision.
    pub fn to_cents(&self) -> SkuFormResult<i64> {
        match self {
            PriceInput::Number(value) => number_to_cents(*value),
            PriceInput::Text(text) => parse_price_cents(text),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkuForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = SKU_MAX_LEN_VALIDATOR))]
    pub sku_number: String,
    pub price: PriceInput,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl CreateSkuForm {
    /// Build a SKU payload for the product taken from the request path.
    pub fn into_new_sku(self, product_id: i32, actor_id: i32) -> SkuFormResult<NewSku> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(SkuFormError::EmptyName);
        }
        let sku_number = sanitize_sku(&self.sku_number);
        if sku_number.is_empty() {
            return Err(SkuFormError::EmptySkuNumber);
        }
        if product_id <= 0 {
            return Err(SkuFormError::InvalidIdentifier {
                field: "product id",
                value: product_id,
            });
        }
        let price_cents = self.price.to_cents()?;

        let mut new_sku =
            NewSku::new(name, sku_number, price_cents, product_id).created_by(actor_id);
        if let Some(description) = optional_multiline(self.description.as_deref()) {
            new_sku = new_sku.with_description(description);
        }
        if let Some(is_active) = self.is_active {
            new_sku.is_active = is_active;
        }
        if let Some(sequence) = self.sequence {
            new_sku = new_sku.with_sequence(sequence);
        }

        Ok(new_sku)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSkuForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(min = 1, max = SKU_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub sku_number: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
    #[validate(length(max = DESCRIPTION_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub product_id: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub sequence: Option<i32>,
}

impl UpdateSkuForm {
    pub fn into_update_sku(self, actor_id: i32) -> SkuFormResult<UpdateSku> {
        self.validate()?;

        let mut update = UpdateSku::new().updated_by(actor_id);

        if let Some(name) = self.name {
            let name = sanitize_inline_text(&name);
            if name.is_empty() {
                return Err(SkuFormError::EmptyName);
            }
            update = update.name(name);
        }
        if let Some(sku_number) = self.sku_number {
            let sku_number = sanitize_sku(&sku_number);
            if sku_number.is_empty() {
                return Err(SkuFormError::EmptySkuNumber);
            }
            update = update.sku_number(sku_number);
        }
        if let Some(price) = self.price {
            update = update.price_cents(price.to_cents()?);
        }
        if let Some(description) = self.description {
            update = update.description(optional_multiline(description.as_deref()));
        }
        if let Some(product_id) = self.product_id {
            if product_id <= 0 {
                return Err(SkuFormError::InvalidIdentifier {
                    field: "product id",
                    value: product_id,
                });
            }
            update = update.product_id(product_id);
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
pub struct SkuListParams {
    pub search: Option<String>,
    pub product_id: Option<i32>,
    pub sku_number: Option<String>,
    #[serde(default)]
    pub include_deleted: bool,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl SkuListParams {
    pub fn pagination(&self) -> Pagination {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
        .normalize()
    }

    pub fn into_query(self) -> SkuListQuery {
        let mut query = SkuListQuery::new().paginate(self.pagination());

        if let Some(search) = self
            .search
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|search| !search.is_empty())
        {
            query = query.search(search);
        }
        if let Some(product_id) = self.product_id {
            query = query.product(product_id);
        }
        if let Some(sku_number) = self
            .sku_number
            .as_deref()
            .map(sanitize_sku)
            .filter(|sku| !sku.is_empty())
        {
            query = query.sku_number(sku_number);
        }
        if self.include_deleted {
            query = query.include_deleted();
        }

        query
    }
}

fn sanitize_sku(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !ch.is_control())
        .collect::<String>()
}

/// Parse `"12"`, `"12.3"` or `"12.34"` into cents. A comma works as the
/// decimal separator too.
fn parse_price_cents(input: &str) -> SkuFormResult<i64> {
    let trimmed = input.trim();
    let invalid = || SkuFormError::InvalidPrice(trimmed.to_string());

    let normalized = trimmed.replace(',', ".");
    let (whole, fraction) = match normalized.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (normalized.as_str(), ""),
    };

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|ch| ch.is_ascii_digit())
        || !fraction.chars().all(|ch| ch.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction))
        .ok_or_else(invalid)
}

fn number_to_cents(value: f64) -> SkuFormResult<i64> {
    let invalid = || SkuFormError::InvalidPrice(value.to_string());
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    let cents = (value * 100.0).round();
    if (value * 100.0 - cents).abs() > 1e-6 || cents > i64::MAX as f64 {
        return Err(invalid());
    }

    Ok(cents as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strings_parse_to_cents() {
        assert_eq!(parse_price_cents("12").unwrap(), 1200);
        assert_eq!(parse_price_cents(" 12.3 ").unwrap(), 1230);
        assert_eq!(parse_price_cents("12,34").unwrap(), 1234);
        assert_eq!(parse_price_cents("0.05").unwrap(), 5);
    }

    #[test]
    fn malformed_prices_are_rejected() {
        for input in ["", "-1", "1.234", "abc", ".5", "1.2.3"] {
            assert!(
                matches!(parse_price_cents(input), Err(SkuFormError::InvalidPrice(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn numeric_prices_round_to_cents() {
        assert_eq!(number_to_cents(19.99).unwrap(), 1999);
        assert!(number_to_cents(-0.5).is_err());
        assert!(number_to_cents(1.001).is_err());
    }

    #[test]
    fn create_form_accepts_number_or_string_price() {
        let from_number: CreateSkuForm = serde_json::from_str(
            r#"{"name": "Laptop 16GB", "sku_number": " LP-16 ", "price": 1299.5}"#,
        )
        .expect("parse");
        let from_text: CreateSkuForm = serde_json::from_str(
            r#"{"name": "Laptop 16GB", "sku_number": "LP-16", "price": "1299.50"}"#,
        )
        .expect("parse");

        let a = from_number.into_new_sku(3, 1).expect("valid form");
        let b = from_text.into_new_sku(3, 1).expect("valid form");

        assert_eq!(a.price_cents, 129_950);
        assert_eq!(b.price_cents, 129_950);
        assert_eq!(a.sku_number, "LP-16");
        assert_eq!(a.product_id, 3);
    }

    #[test]
    fn update_form_sets_only_given_fields() {
        let form: UpdateSkuForm =
            serde_json::from_str(r#"{"price": "10", "description": null}"#).expect("parse");

        let update = form.into_update_sku(2).expect("valid form");

        assert_eq!(update.price_cents, Some(1000));
        assert_eq!(update.description, Some(None));
        assert_eq!(update.name, None);
        assert_eq!(update.sku_number, None);
    }
}
