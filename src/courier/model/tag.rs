//! Tag support for the delivery book.
//!
//! Tags label clients and deliveries ("personal", "corporate", "fragile").
//! Tag names are alphanumeric and case-insensitive: they are folded to
//! lowercase on construction, so `VIP` and `vip` are the same tag everywhere,
//! including in sets and hash maps.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::FieldError;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern"));

/// A normalized (lowercase) tag name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        let trimmed = input.trim();
        if TAG_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(FieldError::Tag)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The broad category this tag falls into, derived from its name.
    pub fn category(&self) -> TagCategory {
        match self.0.as_str() {
            "personal" => TagCategory::Personal,
            "corporate" => TagCategory::Corporate,
            _ => TagCategory::Other,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Personal,
    Corporate,
    Other,
}
