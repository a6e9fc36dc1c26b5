pub mod amenity;
pub mod audit;
pub mod audit_config;
pub mod error;
pub mod mappings;
pub mod parsing;
pub mod street;

// Re-export commonly used items
pub use amenity::{
    audit_amenity, audit_amenity_file, audit_amenity_file_with, try_audit_amenity, update_amenity,
};
pub use audit::{
    StreetAudit, audit_street, audit_street_file, audit_street_file_with, audit_street_type,
    try_audit_street,
};
pub use audit_config::AuditConfig;
pub use error::ParseError;
pub use parsing::{TagValues, is_chosen_tag, parse_tag};
pub use street::{
    SuffixClass, classify, is_expected, strip_redundant, street_type, update_street_name,
    update_type,
};
