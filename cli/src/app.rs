use std::{error::Error, path::PathBuf, time::Instant};
use indicatif::ProgressBar;
use osm_audit_core::{AuditConfig, ParseError, audit_amenity_file_with, audit_street_file_with};
use tracing::debug;

use crate::report::{AmenityReport, StreetReport, amenity_entries};

pub const OSM_FILE_ENV: &str = "OSM_FILE";

pub struct AuditApp {
    pub osm_path: PathBuf,
    pub config: AuditConfig,
}

impl AuditApp {
    pub fn new(osm_file: Option<PathBuf>, config: AuditConfig) -> Result<Self, Box<dyn Error>> {
        let osm_path = match osm_file {
            Some(path) => path,
            None => std::env::var_os(OSM_FILE_ENV)
                .map(PathBuf::from)
                .ok_or("No OSM file given: pass a path or set OSM_FILE")?,
        };

        if !osm_path.is_file() {
            return Err(format!("OSM file does not exist: {:?}", osm_path).into());
        }
        debug!(path = %osm_path.display(), "resolved OSM file");

        Ok(Self { osm_path, config })
    }

    pub fn audit_streets(&self, progress: &ProgressBar) -> Result<StreetReport, ParseError> {
        let scan_timer = Instant::now();
        let mut values_scanned = 0;

        let street_types = audit_street_file_with(&self.osm_path, &self.config, |_| {
            values_scanned += 1;
            progress.inc(1);
        })?;

        Ok(StreetReport {
            osm_path: self.osm_path.clone(),
            street_types,
            values_scanned,
            scan_duration: scan_timer.elapsed().as_secs_f64(),
        })
    }

    pub fn audit_amenities(&self, progress: &ProgressBar) -> Result<AmenityReport, ParseError> {
        let scan_timer = Instant::now();
        let mut values_scanned = 0;

        let amenities = audit_amenity_file_with(&self.osm_path, &self.config, |_| {
            values_scanned += 1;
            progress.inc(1);
        })?;

        Ok(AmenityReport {
            osm_path: self.osm_path.clone(),
            amenities: amenity_entries(amenities),
            values_scanned,
            scan_duration: scan_timer.elapsed().as_secs_f64(),
        })
    }
}
