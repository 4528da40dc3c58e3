//! Pipeline constants and runtime configuration defaults

// Input discovery
/// Extension of landmark files picked up from an input directory
pub const LANDMARK_EXTENSION: &str = "points";

// Filename grammar markers
/// Culture substring that flags a fixed (in vivo) specimen
pub const FIXED_MARKER: &str = "Fix";
/// Culture substring that flags the Ikemoto culture protocol
pub const IKEMOTO_MARKER: &str = "CulIk";
/// Culture substring that flags the default roller culture protocol
pub const CULTURE_MARKER: &str = "Cul";

/// Stage labels and their canonical ages in hours after E12.5
pub const DEFAULT_STAGE_HOURS: [(&str, f64); 6] = [
    ("E12.5", 0.0),
    ("E13", 12.0),
    ("E13.5", 24.0),
    ("E14", 36.0),
    ("E14.5", 48.0),
    ("E15", 60.0),
];

/// Landmark pairings measured when no pairing table is supplied
pub const DEFAULT_PAIRINGS: [(&str, &str); 12] = [
    ("Ant shelf L", "Post shelf L"),
    ("Ant shelf R", "Post shelf R"),
    ("Post shelf L", "Ant whis L"),
    ("Post shelf R", "Ant whis R"),
    ("Post shelf L", "Ant nare L"),
    ("Post shelf R", "Ant nare R"),
    ("Ant shelf L", "Post whis L"),
    ("Ant shelf R", "Post whis R"),
    ("Post whis L", "Post whis R"),
    ("Med shelf L", "Post whis L"),
    ("Med shelf R", "Post whis R"),
    ("Left", "Right"),
];

// Composite measurements averaged over the left and right sides
/// Pairings averaged into the anteroposterior (AP) shelf length
pub const AP_PAIRINGS: [(&str, &str); 2] = [
    ("Ant shelf L", "Post shelf L"),
    ("Ant shelf R", "Post shelf R"),
];
/// Pairings averaged into the mediolateral (ML) shelf extent
pub const ML_PAIRINGS: [(&str, &str); 2] = [
    ("Med shelf L", "Post whis L"),
    ("Med shelf R", "Post whis R"),
];

// Output table names, written into the output directory
/// Long-form point table
pub const POINTS_TABLE: &str = "points.csv";
/// Wide-form distance table
pub const DISTANCES_TABLE: &str = "distances.csv";
/// Long-form measurement table
pub const MEASUREMENTS_TABLE: &str = "measurements.csv";
/// Grouped descriptive statistics
pub const SUMMARY_TABLE: &str = "summary.csv";
/// AP/ML standardisation table
pub const STANDARDISED_TABLE: &str = "standardised.csv";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "results";

// Standardisation groups fixed specimens together regardless of stage
/// Group label given to fixed specimens
pub const IN_VIVO_GROUP: &str = "In vivo";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
