use crate::audit_config::AuditConfig;
use crate::error::ParseError;
use crate::mappings::AMENITY_MAPPING;
use crate::parsing::parse_tag;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::info;

/// Map a raw amenity label to its canonical snake_case value.
pub fn update_amenity(amenity: &str) -> String {
    AMENITY_MAPPING
        .get(amenity)
        .copied()
        .unwrap_or(amenity)
        .to_lowercase()
        .replace(' ', "_")
}

/// Distinct raw amenity values.
pub fn audit_amenity<I, S>(amenities: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    amenities
        .into_iter()
        .map(|amenity| amenity.as_ref().to_string())
        .collect()
}

pub fn try_audit_amenity<I>(amenities: I) -> Result<FxHashSet<String>, ParseError>
where
    I: IntoIterator<Item = Result<String, ParseError>>,
{
    amenities.into_iter().collect()
}

pub fn audit_amenity_file(
    osm_file: &Path,
    config: &AuditConfig,
) -> Result<FxHashSet<String>, ParseError> {
    audit_amenity_file_with(osm_file, config, |_| {})
}

/// Like [`audit_amenity_file`], calling `on_value` with every extracted value.
pub fn audit_amenity_file_with<F>(
    osm_file: &Path,
    config: &AuditConfig,
    mut on_value: F,
) -> Result<FxHashSet<String>, ParseError>
where
    F: FnMut(&str),
{
    let mut values_scanned = 0usize;
    let amenities = parse_tag(osm_file, &config.amenity_key)?
        .with_element_kinds(&config.element_kinds)
        .inspect(|amenity| {
            if let Ok(amenity) = amenity {
                values_scanned += 1;
                on_value(amenity);
            }
        });
    let amenities = try_audit_amenity(amenities)?;

    info!(
        path = %osm_file.display(),
        values_scanned,
        amenities = amenities.len(),
        "amenity audit finished"
    );
    Ok(amenities)
}
