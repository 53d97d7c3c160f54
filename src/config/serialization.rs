//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# drills configuration
# Environment variables override these values:
#   DRILLS_OUTPUT, DRILLS_TIE_BREAK, DRILLS_LOG_LEVEL

# Result format: plain, json
output = "{output}"

# Majority command
[majority]
# Which element wins when several exceed the threshold: smallest, first-seen
tie_break = "{tie_break}"

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"  # hourly, daily, never
file_prefix = "{file_prefix}"
"#,
            output = self.output.as_str(),
            tie_break = self.majority.tie_break.as_str(),
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            // Forward slashes keep Windows paths valid inside TOML basic strings
            file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
