use osm_audit::{format_number, scan_spinner};
use osm_audit_core::audit_street;

fn audit_of(street_count: usize) -> osm_audit_core::StreetAudit {
    audit_street((0..street_count).map(|i| format!("Lane{i} Xyz")))
}

#[test]
fn test_format_street_name_total() {
    let street_types = audit_of(1234);

    assert_eq!(format_number(street_types.len()), "1");
    assert_eq!(format_number(street_types.total_names()), "1,234");
}

#[test]
fn test_format_total_below_thousand() {
    assert_eq!(format_number(audit_of(999).total_names()), "999");
}

#[test]
fn test_format_empty_audit() {
    let street_types = audit_of(0);

    assert!(street_types.is_empty());
    assert_eq!(format_number(street_types.total_names()), "0");
}

#[test]
fn test_format_spinner_position() {
    let spinner = scan_spinner(false);
    spinner.inc(1_234_567);

    assert_eq!(format_number(spinner.position() as usize), "1,234,567");
}

#[test]
fn test_hidden_spinner_still_counts() {
    let spinner = scan_spinner(false);
    spinner.inc(3);

    assert!(spinner.is_hidden());
    assert_eq!(spinner.position(), 3);
}
