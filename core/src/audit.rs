use crate::audit_config::AuditConfig;
use crate::error::ParseError;
use crate::parsing::parse_tag;
use crate::street::{is_expected, street_type, update_street_name};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;
use tracing::{debug, info};

/// Unexpected street suffixes, each with the distinct normalized names that
/// carry it. Entries are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetAudit {
    street_types: FxHashMap<String, FxHashSet<String>>,
}

impl StreetAudit {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, street_type: &str, street_name: String) {
        if !self.street_types.contains_key(street_type) {
            debug!(street_type, example = %street_name, "unexpected street type");
        }
        self.street_types
            .entry(street_type.to_string())
            .or_default()
            .insert(street_name);
    }

    pub fn get(&self, street_type: &str) -> Option<&FxHashSet<String>> {
        self.street_types.get(street_type)
    }

    pub fn contains(&self, street_type: &str) -> bool {
        self.street_types.contains_key(street_type)
    }

    /// Number of distinct unexpected suffixes
    pub fn len(&self) -> usize {
        self.street_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.street_types.is_empty()
    }

    /// Number of distinct street names across all suffixes
    pub fn total_names(&self) -> usize {
        self.street_types.values().map(|names| names.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FxHashSet<String>)> {
        self.street_types
            .iter()
            .map(|(street_type, names)| (street_type.as_str(), names))
    }

    /// Suffixes and their names in lexical order, for stable reporting.
    pub fn sorted(&self) -> Vec<(&str, Vec<&str>)> {
        let mut entries: Vec<(&str, Vec<&str>)> = self
            .iter()
            .map(|(street_type, names)| {
                let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
                names.sort_unstable();
                (street_type, names)
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Normalize one raw street name and record it when its suffix is not expected.
pub fn audit_street_type(street_types: &mut StreetAudit, street_name: &str) {
    let street_name = update_street_name(street_name);
    if let Some(street_type) = street_type(&street_name) {
        if !is_expected(street_type) {
            let street_type = street_type.to_string();
            street_types.record(&street_type, street_name);
        }
    }
}

pub fn audit_street<I, S>(street_names: I) -> StreetAudit
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    street_names
        .into_iter()
        .fold(StreetAudit::new(), |mut street_types, street_name| {
            audit_street_type(&mut street_types, street_name.as_ref());
            street_types
        })
}

/// Fold over a fallible stream of street names, stopping at the first error.
pub fn try_audit_street<I>(street_names: I) -> Result<StreetAudit, ParseError>
where
    I: IntoIterator<Item = Result<String, ParseError>>,
{
    street_names
        .into_iter()
        .try_fold(StreetAudit::new(), |mut street_types, street_name| {
            audit_street_type(&mut street_types, &street_name?);
            Ok(street_types)
        })
}

pub fn audit_street_file(osm_file: &Path, config: &AuditConfig) -> Result<StreetAudit, ParseError> {
    audit_street_file_with(osm_file, config, |_| {})
}

/// Audit the street names in an OSM file, calling `on_value` with every
/// extracted raw value before it is normalized.
pub fn audit_street_file_with<F>(
    osm_file: &Path,
    config: &AuditConfig,
    mut on_value: F,
) -> Result<StreetAudit, ParseError>
where
    F: FnMut(&str),
{
    let mut values_scanned = 0usize;
    let street_names = parse_tag(osm_file, &config.street_key)?
        .with_element_kinds(&config.element_kinds)
        .inspect(|street_name| {
            if let Ok(street_name) = street_name {
                values_scanned += 1;
                on_value(street_name);
            }
        });
    let street_types = try_audit_street(street_names)?;

    info!(
        path = %osm_file.display(),
        values_scanned,
        street_types = street_types.len(),
        street_names = street_types.total_names(),
        "street audit finished"
    );
    Ok(street_types)
}
