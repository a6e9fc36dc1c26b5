use std::path::Path;
use osm_audit_core::SuffixClass;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::report::{AmenityReport, NormalizedName, StreetReport};
use crate::utils::format_number;

pub fn display_scan_info(osm_path: &Path, key: &str, colors: &ColorScheme) {
    println!(
        "🗺️  Auditing {} values in {}",
        colors.street_type(&format!("\"{}\"", key)),
        osm_path.display()
    );
    println!("🔍 Scanning...");
}

pub fn display_street_report(report: &StreetReport, display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        println!("\n---\n");
    }

    if report.street_types.is_empty() {
        println!("{} All street types are expected", colors.success("✅"));
    } else {
        for (street_type, street_names) in report.street_types.sorted() {
            println!(
                "{} ({})",
                colors.street_type(&format!("\"{}\"", street_type)),
                colors.number(&street_names.len().to_string())
            );

            if !display_options.quiet {
                for street_name in street_names {
                    println!("   {}", colors.street_name(street_name));
                }
            }
        }

        println!(
            "\n{} {} unexpected street types across {} street names",
            colors.warning("⚠️ "),
            colors.number(&format_number(report.street_types.len())),
            colors.number(&format_number(report.street_types.total_names()))
        );
    }

    if display_options.verbose {
        display_scan_statistics(report.values_scanned, report.scan_duration, colors);
    }
}

pub fn display_amenity_report(report: &AmenityReport, display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        println!("\n---\n");
    }

    if !display_options.quiet {
        for entry in &report.amenities {
            if entry.is_remapped() {
                println!(
                    "{} → {}",
                    colors.street_name(&entry.raw),
                    colors.canonical(&entry.canonical)
                );
            } else {
                println!("{}", colors.street_name(&entry.raw));
            }
        }
        println!();
    }

    println!(
        "{} {} distinct amenities, {} remapped",
        colors.stats("📊"),
        colors.number(&format_number(report.amenities.len())),
        colors.number(&format_number(report.remapped_count()))
    );

    if display_options.verbose {
        display_scan_statistics(report.values_scanned, report.scan_duration, colors);
    }
}

pub fn display_normalized_names(names: &[NormalizedName], display_options: &Args, colors: &ColorScheme) {
    for name in names {
        let mut formatted_line = format!(
            "\"{}\" → {}",
            name.raw,
            colors.canonical(&format!("\"{}\"", name.canonical))
        );

        if !display_options.quiet {
            formatted_line.push_str(&format!(" {}", format_classification(&name.classification, colors)));
        }

        println!("{}", formatted_line);
    }
}

fn format_classification(classification: &SuffixClass, colors: &ColorScheme) -> String {
    match classification {
        SuffixClass::Expected(suffix) => format!("[{} {}]", colors.success("expected"), suffix),
        SuffixClass::Unexpected(suffix) => {
            format!("[{} {}]", colors.warning("unexpected"), colors.street_type(suffix))
        }
        SuffixClass::Missing => format!("[{}]", colors.error("no suffix")),
    }
}

fn display_scan_statistics(values_scanned: usize, scan_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Scanned {} tag values in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(values_scanned)),
        colors.number(&format!("{:.3}", scan_duration))
    );
}
