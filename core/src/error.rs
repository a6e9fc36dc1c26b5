use std::io;
use thiserror::Error;

/// Errors raised while streaming tag values out of an OSM document.
///
/// Normalization and auditing never fail; only reading the document can.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open OSM document: {0}")]
    Io(#[from] io::Error),

    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("tag '{key}' at byte {position} has no 'v' attribute")]
    MissingValue { key: String, position: u64 },
}
