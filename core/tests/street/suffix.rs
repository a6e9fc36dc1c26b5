use osm_audit_core::{street_type, update_type};

#[test]
fn test_street_type_trailing_word() {
    assert_eq!(street_type("Orchard Road"), Some("Road"));
    assert_eq!(street_type("orchard rd"), Some("rd"));
    assert_eq!(street_type("Somewhere St."), Some("St."));
}

#[test]
fn test_street_type_includes_hyphenated_run() {
    assert_eq!(street_type("Ang Mo Kio-Ave"), Some("Kio-Ave"));
}

#[test]
fn test_street_type_no_match() {
    assert_eq!(street_type("Avenue 3"), None);
    assert_eq!(street_type("Block (North)"), None);
    assert_eq!(street_type("Orchard Road "), None);
    assert_eq!(street_type(""), None);
}

#[test]
fn test_update_type_rewrites_abbreviations() {
    assert_eq!(update_type("Orchard Rd"), "Orchard Road");
    assert_eq!(update_type("Orchard Rd."), "Orchard Road");
    assert_eq!(update_type("Somewhere St."), "Somewhere Street");
    assert_eq!(update_type("Serangoon Ave"), "Serangoon Avenue");
    assert_eq!(update_type("Changi Roads"), "Changi Road");
    assert_eq!(update_type("Marine Dr"), "Marine Drive");
}

#[test]
fn test_update_type_unknown_suffix_is_noop() {
    assert_eq!(update_type("Orchard Boulevard"), "Orchard Boulevard");
    assert_eq!(update_type("Somewhere Xyz"), "Somewhere Xyz");
}

#[test]
fn test_update_type_mapping_is_case_sensitive() {
    assert_eq!(update_type("orchard rd"), "orchard rd");
}

#[test]
fn test_update_type_without_suffix_is_noop() {
    assert_eq!(update_type("Avenue 3"), "Avenue 3");
    assert_eq!(update_type(""), "");
}

#[test]
fn test_update_type_replaces_first_occurrence() {
    assert_eq!(update_type("St James Rd"), "St James Road");
    // The first "St" in the name is rewritten, not the trailing suffix
    assert_eq!(update_type("Stevens St"), "Streetevens St");
    assert_eq!(update_type("Rd Rd"), "Road Rd");
}
