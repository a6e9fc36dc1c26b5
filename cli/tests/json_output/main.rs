use osm_audit::json_output::{create_amenity_json, create_normalize_json, create_street_json};
use osm_audit::report::{AmenityReport, StreetReport, amenity_entries};
use osm_audit::normalize_names;
use osm_audit_core::{AuditConfig, audit_amenity, audit_street};
use std::path::PathBuf;

fn street_report() -> StreetReport {
    StreetReport {
        osm_path: PathBuf::from("singapore.osm"),
        street_types: audit_street(["Orchard Rd", "Gamma Aaa", "Alpha Zzz", "Beta Aaa", "Beta Aaa"]),
        values_scanned: 5,
        scan_duration: 1.5,
    }
}

#[test]
fn test_street_json_output() {
    let config = AuditConfig::default();
    let json_output = create_street_json(&street_report(), &config);

    assert_eq!(json_output.query.file, "singapore.osm");
    assert_eq!(json_output.query.key, "addr:street");
    assert_eq!(json_output.query.elements, vec!["node", "way"]);
    assert_eq!(json_output.street_types.len(), 2);
    assert_eq!(json_output.street_types[0].suffix, "Aaa");
    assert_eq!(json_output.street_types[0].names, vec!["Beta Aaa", "Gamma Aaa"]);
    assert_eq!(json_output.street_types[1].suffix, "Zzz");
    assert_eq!(json_output.stats.scan_time_ms, 1500);
    assert_eq!(json_output.stats.values_scanned, 5);
}

#[test]
fn test_street_json_serialization() {
    let json_output = create_street_json(&street_report(), &AuditConfig::default());
    let json_string = serde_json::to_string(&json_output).unwrap();

    assert!(json_string.contains(r#""suffix":"Aaa""#));
    assert!(json_string.contains(r#""names":["Beta Aaa","Gamma Aaa"]"#));
    assert!(json_string.contains(r#""scan_time_ms":1500"#));
    assert!(!json_string.contains("Orchard"));
}

#[test]
fn test_street_json_empty_audit() {
    let report = StreetReport {
        osm_path: PathBuf::from("singapore.osm"),
        street_types: audit_street(["Orchard Road"]),
        values_scanned: 1,
        scan_duration: 0.0,
    };

    let json_output = create_street_json(&report, &AuditConfig::default());
    let json_string = serde_json::to_string(&json_output).unwrap();

    assert!(json_output.street_types.is_empty());
    assert!(json_string.contains(r#""street_types":[]"#));
}

#[test]
fn test_amenity_json_output() {
    let report = AmenityReport {
        osm_path: PathBuf::from("singapore.osm"),
        amenities: amenity_entries(audit_amenity(["deli", "cafe", "deli"])),
        values_scanned: 3,
        scan_duration: 0.25,
    };

    let json_output = create_amenity_json(&report, &AuditConfig::default());

    assert_eq!(json_output.query.key, "amenity");
    assert_eq!(json_output.amenities.len(), 2);
    assert_eq!(json_output.amenities[0].raw, "cafe");
    assert_eq!(json_output.amenities[1].raw, "deli");
    assert_eq!(json_output.amenities[1].canonical, "food_court");
    assert_eq!(json_output.stats.scan_time_ms, 250);
}

#[test]
fn test_normalize_json_output() {
    let names = normalize_names(&["Orchard Rd".to_string(), "Avenue 3".to_string()]);
    let json_string = serde_json::to_string(&create_normalize_json(&names)).unwrap();

    assert_eq!(
        json_string,
        concat!(
            r#"[{"raw":"Orchard Rd","canonical":"Orchard Road","#,
            r#""classification":{"status":"expected","suffix":"Road"}},"#,
            r#"{"raw":"Avenue 3","canonical":"Avenue 3","classification":{"status":"missing"}}]"#
        )
    );
}
