/// Compiled stylesheet location, relative to the project root.
pub const CSS_FILE: &str = "static/css/styles.css";

/// Hard limit (uncompressed). The build fails above this.
pub const MAX_SIZE_KB: u64 = 15;

/// Target (uncompressed). Exceeding it only warns.
pub const TARGET_SIZE_KB: u64 = 12;

pub const BYTES_PER_KB: u64 = 1024;

/// Config file looked up under the project root when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "css-guard.toml";

/// Module file the utility-class generator loads.
pub const GENERATOR_CONFIG_FILE: &str = "tailwind.config.js";

pub const CONTENT_GLOBS: [&str; 3] = [
    "./layouts/**/*.html",
    "./content/**/*.md",
    "./content/**/*.html",
];

pub const SANS_FONT_TOKEN: &str = "sans";
pub const SANS_FONT_STACK: [&str; 3] = ["Inter", "system-ui", "sans-serif"];

pub const REMEDIATION_HINTS: [&str; 3] = [
    "Remove unused utility classes",
    "Check for duplicate styles",
    "Verify tailwind.config.js content paths",
];
