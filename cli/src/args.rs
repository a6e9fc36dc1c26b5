use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osm-audit")]
#[command(about = "Audit and normalize street names and amenities in an OpenStreetMap export")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show scan info, statistics and log events
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only show summaries
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// List street suffixes that are not in the expected list
    Streets {
        /// OSM XML export (defaults to $OSM_FILE)
        file: Option<PathBuf>,

        /// Tag key holding street names
        #[arg(short = 'k', long, value_name = "KEY", default_value = "addr:street")]
        key: String,

        /// Only read tags nested in these elements
        #[arg(short = 'e', long = "element", value_name = "NAME", default_values = ["node", "way"])]
        elements: Vec<String>,
    },

    /// List distinct amenity values and their canonical form
    Amenities {
        /// OSM XML export (defaults to $OSM_FILE)
        file: Option<PathBuf>,

        /// Tag key holding amenity categories
        #[arg(short = 'k', long, value_name = "KEY", default_value = "amenity")]
        key: String,

        /// Only read tags nested in these elements
        #[arg(short = 'e', long = "element", value_name = "NAME", default_values = ["node", "way"])]
        elements: Vec<String>,
    },

    /// Normalize street names given on the command line
    Normalize {
        /// Raw street names
        #[arg(required = true)]
        names: Vec<String>,
    },
}
