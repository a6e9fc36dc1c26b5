//! Static lookup tables used by the street and amenity normalizers.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

/// Street suffixes accepted as canonical.
pub static EXPECTED_STREET_TYPES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "Alley", "Avenue", "Boulevard", "Central", "Circus", "Cirle", "Close", "Crescent",
        "Drive", "Geylang", "Grane", "Grove", "Hill", "Jalan", "Lane", "Link", "Lorong", "Path",
        "Palace", "Park", "Place", "Rise", "Road", "Square", "Street", "Terrace", "Track",
        "Vale", "View", "Vista", "Walk", "Way",
    ]
    .into_iter()
    .collect()
});

/// Abbreviated or misspelled suffix -> canonical suffix.
pub static STREET_TYPE_MAPPING: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Ave", "Avenue"),
        ("Avebune", "Avenue"),
        ("Dr", "Drive"),
        ("St", "Street"),
        ("St.", "Street"),
        ("Rd", "Road"),
        ("Rd.", "Road"),
        ("Roads", "Road"),
    ]
    .into_iter()
    .collect()
});

/// Raw amenity label -> canonical OSM amenity value.
pub static AMENITY_MAPPING: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("carpark", "parking"),
        ("coffeeshop", "cafe"),
        ("internet cafe", "cafe"),
        ("deli", "food_court"),
        ("Mail drop", "post_box"),
        ("childcare", "childcare_centre"),
        ("bar;restaurant", "bar"),
        ("restaurant;taxi", "taxi"),
    ]
    .into_iter()
    .collect()
});
