//! Request payloads: deserialized, validated and sanitized into domain types.

use serde::{Deserialize, Deserializer};

use crate::pagination::{PageParams, Pagination};

pub mod attribute_values;
pub mod attributes;
pub mod categories;
pub mod images;
pub mod products;
pub mod skus;
pub mod users;

/// Distinguish a missing field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use together with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string shared by list endpoints that only paginate.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    #[serde(default)]
    pub include_deleted: bool,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ListParams {
    pub fn pagination(&self) -> Pagination {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
        .normalize()
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|term| !term.is_empty())
    }
}

/// Query string accepted by delete endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    /// Remove the row instead of marking it deleted.
    #[serde(default)]
    pub permanent: bool,
}

pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        if line.is_empty() {
            if previous_empty {
                continue;
            }
            previous_empty = true;
        } else {
            previous_empty = false;
        }
        result.push(line);
    }

    result.join("\n")
}

/// Sanitized optional text, `None` when nothing is left.
pub(crate) fn optional_multiline(value: Option<&str>) -> Option<String> {
    value
        .map(sanitize_multiline_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_collapses_whitespace_and_drops_controls() {
        assert_eq!(sanitize_inline_text("  Gaming \t Laptops\u{7}  "), "Gaming Laptops");
    }

    #[test]
    fn multiline_text_trims_blank_edges_and_runs() {
        let input = "\n\n first line \n\n\n second  line \n\n";
        assert_eq!(sanitize_multiline_text(input), "first line\n\nsecond line");
        assert_eq!(optional_multiline(Some(" \n ")), None);
    }

    #[test]
    fn double_option_tells_null_from_missing() {
        #[derive(Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "double_option")]
            description: Option<Option<String>>,
        }

        let missing: Patch = serde_json::from_str("{}").expect("parse");
        let null: Patch = serde_json::from_str(r#"{"description": null}"#).expect("parse");
        let set: Patch = serde_json::from_str(r#"{"description": "x"}"#).expect("parse");

        assert_eq!(missing.description, None);
        assert_eq!(null.description, Some(None));
        assert_eq!(set.description, Some(Some("x".to_string())));
    }

    #[test]
    fn list_params_clamp_pagination() {
        let params = ListParams {
            page: Some(0),
            limit: Some(500),
            ..ListParams::default()
        };
        let pagination = params.pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 100);
    }
}
