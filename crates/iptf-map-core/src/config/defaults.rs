//! Default values for IPTF Map configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Content Defaults
// ============================================================================

/// Default content root, relative to the working directory.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Suffix of document files. Link targets must carry it too.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Files never turned into nodes, regardless of category.
pub const DEFAULT_SKIP_FILES: &[&str] = &["_template.md", "README.md"];

/// Maximum summary length in characters, before the ellipsis.
pub const DEFAULT_SUMMARY_MAX_LEN: usize = 200;

/// Marker appended to truncated summaries.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Title labels stripped from the start of a document title ("Pattern: X" -> "X").
pub const TITLE_LABEL_PREFIXES: &[&str] = &["Pattern", "Vendor", "Domain"];

// ============================================================================
// Output Defaults
// ============================================================================

/// Default destination of the graph artifact.
pub const DEFAULT_OUTPUT_PATH: &str = "map/src/data/graph.json";

/// Pretty-print the artifact by default.
pub const DEFAULT_PRETTY_OUTPUT: bool = true;

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "iptf-map.toml";

/// Subdirectory of the user config dir.
pub const USER_CONFIG_DIR: &str = "iptf-map";

/// Config file name inside the user config dir.
pub const USER_CONFIG_FILE: &str = "config.toml";
