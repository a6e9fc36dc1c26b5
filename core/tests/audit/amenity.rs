use osm_audit_core::{audit_amenity, update_amenity};

#[test]
fn test_update_amenity_mapped() {
    assert_eq!(update_amenity("carpark"), "parking");
    assert_eq!(update_amenity("internet cafe"), "cafe");
    assert_eq!(update_amenity("Mail drop"), "post_box");
    assert_eq!(update_amenity("bar;restaurant"), "bar");
    assert_eq!(update_amenity("childcare"), "childcare_centre");
}

#[test]
fn test_update_amenity_unmapped_is_snake_cased() {
    assert_eq!(update_amenity("Fast Food"), "fast_food");
    assert_eq!(update_amenity("restaurant"), "restaurant");
    assert_eq!(update_amenity(""), "");
}

#[test]
fn test_update_amenity_lookup_is_exact() {
    // Only "Mail drop" is a mapping key
    assert_eq!(update_amenity("mail drop"), "mail_drop");
}

#[test]
fn test_audit_amenity_distinct() {
    let amenities = audit_amenity(["cafe", "carpark", "cafe", "Mail drop"]);

    assert_eq!(amenities.len(), 3);
    assert!(amenities.contains("carpark"));
    assert!(amenities.contains("Mail drop"));
}
