mod casing;
mod redundant;
mod suffix;

pub use redundant::strip_redundant;
pub use suffix::{street_type, update_type};

use crate::mappings::EXPECTED_STREET_TYPES;
use serde::Serialize;

/// Canonical form of a raw street name: redundant fragments stripped,
/// title-cased, then the trailing suffix rewritten.
pub fn update_street_name(street_name: &str) -> String {
    update_type(&strip_redundant(street_name))
}

pub fn is_expected(street_type: &str) -> bool {
    EXPECTED_STREET_TYPES.contains(street_type)
}

/// How the suffix of a normalized street name compares to the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "suffix", rename_all = "lowercase")]
pub enum SuffixClass {
    Expected(String),
    Unexpected(String),
    Missing,
}

impl SuffixClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuffixClass::Expected(_) => "expected",
            SuffixClass::Unexpected(_) => "unexpected",
            SuffixClass::Missing => "missing",
        }
    }
}

/// Classify an already normalized street name by its suffix.
pub fn classify(street_name: &str) -> SuffixClass {
    match street_type(street_name) {
        Some(suffix) if is_expected(suffix) => SuffixClass::Expected(suffix.to_string()),
        Some(suffix) => SuffixClass::Unexpected(suffix.to_string()),
        None => SuffixClass::Missing,
    }
}
