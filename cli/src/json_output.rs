use osm_audit_core::{AuditConfig, SuffixClass};
use serde::{Deserialize, Serialize};

use crate::report::{AmenityReport, NormalizedName, StreetReport};

#[derive(Serialize, Deserialize)]
pub struct JsonStreetOutput {
    pub query: JsonQuery,
    pub street_types: Vec<JsonStreetType>,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonAmenityOutput {
    pub query: JsonQuery,
    pub amenities: Vec<JsonAmenity>,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub file: String,
    pub key: String,
    pub elements: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStreetType {
    pub suffix: String,
    pub names: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonAmenity {
    pub raw: String,
    pub canonical: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub scan_time_ms: u64,
    pub values_scanned: usize,
}

#[derive(Serialize)]
pub struct JsonNormalizedName {
    pub raw: String,
    pub canonical: String,
    pub classification: SuffixClass,
}

pub fn create_street_json(report: &StreetReport, config: &AuditConfig) -> JsonStreetOutput {
    let street_types = report
        .street_types
        .sorted()
        .into_iter()
        .map(|(suffix, names)| JsonStreetType {
            suffix: suffix.to_string(),
            names: names.into_iter().map(str::to_string).collect(),
        })
        .collect();

    JsonStreetOutput {
        query: JsonQuery {
            file: report.osm_path.display().to_string(),
            key: config.street_key.clone(),
            elements: config.element_kinds.clone(),
        },
        street_types,
        stats: JsonStats {
            scan_time_ms: (report.scan_duration * 1000.0) as u64,
            values_scanned: report.values_scanned,
        },
    }
}

pub fn create_amenity_json(report: &AmenityReport, config: &AuditConfig) -> JsonAmenityOutput {
    JsonAmenityOutput {
        query: JsonQuery {
            file: report.osm_path.display().to_string(),
            key: config.amenity_key.clone(),
            elements: config.element_kinds.clone(),
        },
        amenities: report
            .amenities
            .iter()
            .map(|entry| JsonAmenity {
                raw: entry.raw.clone(),
                canonical: entry.canonical.clone(),
            })
            .collect(),
        stats: JsonStats {
            scan_time_ms: (report.scan_duration * 1000.0) as u64,
            values_scanned: report.values_scanned,
        },
    }
}

pub fn create_normalize_json(names: &[NormalizedName]) -> Vec<JsonNormalizedName> {
    names
        .iter()
        .map(|name| JsonNormalizedName {
            raw: name.raw.clone(),
            canonical: name.canonical.clone(),
            classification: name.classification.clone(),
        })
        .collect()
}

pub fn print_json_output<T: Serialize>(json_output: &T) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
