pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod report;
pub mod utils;

// Re-export commonly used items
pub use app::AuditApp;
pub use args::{Args, Command};
pub use colors::ColorScheme;
pub use report::{AmenityEntry, AmenityReport, NormalizedName, StreetReport, normalize_names};
pub use utils::{format_number, scan_spinner};
