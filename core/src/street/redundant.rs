use super::casing::title_case;
use once_cell::sync::Lazy;
use regex::Regex;

// "<anything>#<unit>, " or a leading house number, then an optional comma and a space
static NUMBER_HOUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*#([\d-]+)|(^\d+)),? ").expect("valid house number pattern"));

// ", <area>" tail, or a "Blok" block marker running to the end
static AREA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(, .+)|(Blok\.? .+\n?)$").expect("valid area pattern"));

/// Drop unit numbers, leading house numbers and trailing area descriptors,
/// then title-case the rest and remove newlines.
///
/// Each pattern removes at most its first match. A name with nothing to strip
/// is only re-cased.
pub fn strip_redundant(street_name: &str) -> String {
    let without_number = NUMBER_HOUSE_RE.replacen(street_name, 1, "");
    let without_area = AREA_RE.replacen(&without_number, 1, "");
    title_case(&without_area).replace('\n', "")
}
