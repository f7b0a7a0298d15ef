//! URL-safe slugs derived from display names.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Highest numeric suffix tried before giving up on a unique slug.
pub const MAX_SLUG_SUFFIX: usize = 1000;

/// Raised when every suffix up to [`MAX_SLUG_SUFFIX`] is already taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no unique slug for `{base}` after {attempts} attempts")]
pub struct SlugResolutionExhausted {
    pub base: String,
    pub attempts: usize,
}

/// Convert free text into a lowercase, hyphen separated token.
///
/// Accents are stripped (`Café` becomes `cafe`) and every run of characters
/// outside `[a-z0-9]` collapses into a single hyphen. Text without any
/// alphanumeric character yields an empty string, which callers treat as
/// "no slug".
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let folded: String = lowered
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .nfc()
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;
    for ch in folded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Find the first of `base`, `base-1`, `base-2`, ... not present in `existing`.
pub fn try_unique_slug(
    base: &str,
    existing: &HashSet<String>,
) -> Result<String, SlugResolutionExhausted> {
    if base.is_empty() || !existing.contains(base) {
        return Ok(base.to_string());
    }

    (1..=MAX_SLUG_SUFFIX)
        .map(|counter| format!("{base}-{counter}"))
        .find(|candidate| !existing.contains(candidate))
        .ok_or_else(|| SlugResolutionExhausted {
            base: base.to_string(),
            attempts: MAX_SLUG_SUFFIX,
        })
}

/// Like [`try_unique_slug`], but falls back to `base` once the search is exhausted.
///
/// The fallback is logged; the unique index on the slug column rejects the
/// write if the collision is real.
pub fn unique_slug(base: &str, existing: &HashSet<String>) -> String {
    match try_unique_slug(base, existing) {
        Ok(slug) => slug,
        Err(err) => {
            log::warn!("{err}; falling back to the base slug");
            base.to_string()
        }
    }
}

/// Table whose `slug` column a sluggable entity must be unique in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugNamespace {
    Categories,
    Products,
    Skus,
}

impl SlugNamespace {
    pub fn table_name(&self) -> &'static str {
        match self {
            SlugNamespace::Categories => "categories",
            SlugNamespace::Products => "products",
            SlugNamespace::Skus => "skus",
        }
    }
}

impl fmt::Display for SlugNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Entity whose slug is derived from its name and kept unique per namespace.
pub trait Sluggable {
    fn name(&self) -> &str;
    fn slug(&self) -> &str;
    fn set_slug(&mut self, slug: String);
    /// Persisted identifier, `None` while the entity has not been stored yet.
    fn id(&self) -> Option<i32>;
    fn namespace(&self) -> SlugNamespace;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Electronics & Gadgets"), "electronics-gadgets");
        assert_eq!(slugify("Café & Restaurant"), "cafe-restaurant");
        assert_eq!(slugify("iPhone 15 Pro Max"), "iphone-15-pro-max");
        assert_eq!(slugify("This---is---a---test"), "this-is-a-test");
        assert_eq!(slugify("  --Leading and trailing--  "), "leading-and-trailing");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn slugify_without_alphanumerics_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!@#$%^&*()"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in [
            "Electronics & Gadgets",
            "Café & Restaurant",
            "This---is---a---test",
            "Smart Phones & Accessories",
            "ÅÄÖ 123 !!",
            "",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn unique_slug_keeps_free_base() {
        assert_eq!(unique_slug("electronics", &HashSet::new()), "electronics");
        assert_eq!(unique_slug("electronics", &set(&["books"])), "electronics");
    }

    #[test]
    fn unique_slug_appends_first_free_suffix() {
        assert_eq!(
            unique_slug("electronics", &set(&["electronics"])),
            "electronics-1"
        );
        assert_eq!(
            unique_slug(
                "electronics",
                &set(&["electronics", "electronics-1", "electronics-2"])
            ),
            "electronics-3"
        );
        assert_eq!(
            unique_slug("electronics", &set(&["electronics", "electronics-2"])),
            "electronics-1"
        );
    }

    #[test]
    fn unique_slug_of_empty_base_is_empty() {
        assert_eq!(unique_slug("", &set(&["", "-1"])), "");
    }

    #[test]
    fn exhausted_search_reports_and_falls_back() {
        let mut existing = set(&["busy"]);
        for counter in 1..=MAX_SLUG_SUFFIX {
            existing.insert(format!("busy-{counter}"));
        }

        assert_eq!(
            try_unique_slug("busy", &existing),
            Err(SlugResolutionExhausted {
                base: "busy".to_string(),
                attempts: MAX_SLUG_SUFFIX,
            })
        );
        assert_eq!(unique_slug("busy", &existing), "busy");
    }
}
