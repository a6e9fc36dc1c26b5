use clap::Parser;
use osm_audit::display::{
    display_amenity_report, display_normalized_names, display_scan_info, display_street_report,
};
use osm_audit::json_output::{
    create_amenity_json, create_normalize_json, create_street_json, print_json_output,
};
use osm_audit::logging::init_tracing;
use osm_audit::*;
use osm_audit_core::AuditConfig;
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Streets { file, key, elements } => {
            let config = AuditConfig {
                street_key: key.clone(),
                element_kinds: elements.clone(),
                ..AuditConfig::default()
            };
            let app = AuditApp::new(file.clone(), config)?;

            if shows_progress(args) {
                display_scan_info(&app.osm_path, key, colors);
            }
            let progress = scan_spinner(shows_progress(args));
            let report = app.audit_streets(&progress)?;
            progress.finish_and_clear();

            if args.json {
                print_json_output(&create_street_json(&report, &app.config));
            } else {
                display_street_report(&report, args, colors);
            }
        }
        Command::Amenities { file, key, elements } => {
            let config = AuditConfig {
                amenity_key: key.clone(),
                element_kinds: elements.clone(),
                ..AuditConfig::default()
            };
            let app = AuditApp::new(file.clone(), config)?;

            if shows_progress(args) {
                display_scan_info(&app.osm_path, key, colors);
            }
            let progress = scan_spinner(shows_progress(args));
            let report = app.audit_amenities(&progress)?;
            progress.finish_and_clear();

            if args.json {
                print_json_output(&create_amenity_json(&report, &app.config));
            } else {
                display_amenity_report(&report, args, colors);
            }
        }
        Command::Normalize { names } => {
            let normalized = normalize_names(names);

            if args.json {
                print_json_output(&create_normalize_json(&normalized));
            } else {
                display_normalized_names(&normalized, args, colors);
            }
        }
    }

    Ok(())
}

fn shows_progress(args: &Args) -> bool {
    !args.json && !args.quiet
}
