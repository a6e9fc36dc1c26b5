/// Configuration for an audit run over an OSM export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Tag key holding street names
    pub street_key: String,
    /// Tag key holding amenity categories
    pub amenity_key: String,
    /// Element names whose nested tags are extracted
    pub element_kinds: Vec<String>,
}

impl AuditConfig {
    pub fn new(street_key: &str, amenity_key: &str) -> Self {
        Self {
            street_key: street_key.to_string(),
            amenity_key: amenity_key.to_string(),
            ..Self::default()
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            street_key: "addr:street".to_string(),
            amenity_key: "amenity".to_string(),
            element_kinds: vec!["node".to_string(), "way".to_string()],
        }
    }
}
