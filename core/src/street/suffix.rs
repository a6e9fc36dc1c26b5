use crate::mappings::STREET_TYPE_MAPPING;
use once_cell::sync::Lazy;
use regex::Regex;

static STREET_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[^ \d)]+\.?$").expect("valid street type pattern"));

/// Trailing suffix token of a street name, including one trailing period.
///
/// Returns `None` when the name ends in a digit, a space or a `)`.
pub fn street_type(street_name: &str) -> Option<&str> {
    STREET_TYPE_RE
        .find(street_name)
        .map(|street_type| street_type.as_str())
}

/// Rewrite the suffix with its canonical spelling.
///
/// The first occurrence of the matched suffix anywhere in the name is
/// replaced, not necessarily the trailing one: `"Stevens St"` becomes
/// `"Streetevens St"`. Names whose suffix has no mapping come back unchanged.
pub fn update_type(street_name: &str) -> String {
    let Some(street_type) = street_type(street_name) else {
        return street_name.to_string();
    };

    match STREET_TYPE_MAPPING.get(street_type) {
        Some(canonical) => street_name.replacen(street_type, canonical, 1),
        None => street_name.to_string(),
    }
}
