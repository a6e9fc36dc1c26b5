use osm_audit_core::update_street_name;

#[test]
fn test_update_street_name_full_pipeline() {
    assert_eq!(update_street_name("123, Orchard Rd"), "Orchard Road");
    assert_eq!(update_street_name("ORCHARD RD."), "Orchard Road");
    assert_eq!(update_street_name("Blk 5 #01-02, Jalan Besar"), "Jalan Besar");
    assert_eq!(update_street_name("Serangoon Ave, Singapore"), "Serangoon Avenue");
    assert_eq!(update_street_name("somewhere st.\n"), "Somewhere Street");
}

#[test]
fn test_update_street_name_canonical_input_unchanged() {
    assert_eq!(update_street_name("Orchard Road"), "Orchard Road");
    assert_eq!(update_street_name("Jalan Besar"), "Jalan Besar");
}

#[test]
fn test_update_street_name_idempotent() {
    let raw_names = [
        "Orchard Rd",
        "123, Jalan Besar",
        "Blk 5 #01-02, Upper Serangoon Rd.",
        "ORCHARD road, Central Area",
        "Marine Parade Avebune",
        "Avenue 3",
        "Block (North)",
    ];

    for raw in raw_names {
        let once = update_street_name(raw);
        assert_eq!(update_street_name(&once), once, "not idempotent for {raw:?}");
    }
}
