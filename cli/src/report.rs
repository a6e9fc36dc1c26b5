use std::path::PathBuf;
use osm_audit_core::{StreetAudit, SuffixClass, classify, update_amenity, update_street_name};
use rustc_hash::FxHashSet;

pub struct StreetReport {
    pub osm_path: PathBuf,
    pub street_types: StreetAudit,
    pub values_scanned: usize,
    pub scan_duration: f64,
}

pub struct AmenityReport {
    pub osm_path: PathBuf,
    pub amenities: Vec<AmenityEntry>,
    pub values_scanned: usize,
    pub scan_duration: f64,
}

impl AmenityReport {
    pub fn remapped_count(&self) -> usize {
        self.amenities.iter().filter(|entry| entry.is_remapped()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityEntry {
    pub raw: String,
    pub canonical: String,
}

impl AmenityEntry {
    pub fn new(raw: String) -> Self {
        let canonical = update_amenity(&raw);
        Self { raw, canonical }
    }

    pub fn is_remapped(&self) -> bool {
        self.raw != self.canonical
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub raw: String,
    pub canonical: String,
    pub classification: SuffixClass,
}

/// Distinct amenities with their canonical value, sorted by raw value.
pub fn amenity_entries(amenities: FxHashSet<String>) -> Vec<AmenityEntry> {
    let mut entries: Vec<AmenityEntry> = amenities.into_iter().map(AmenityEntry::new).collect();
    entries.sort_unstable_by(|a, b| a.raw.cmp(&b.raw));
    entries
}

pub fn normalize_names(raw_names: &[String]) -> Vec<NormalizedName> {
    raw_names
        .iter()
        .map(|raw| {
            let canonical = update_street_name(raw);
            let classification = classify(&canonical);
            NormalizedName {
                raw: raw.clone(),
                canonical,
                classification,
            }
        })
        .collect()
}
