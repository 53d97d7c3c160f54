//! Majority command configuration

use serde::Deserialize;

use crate::majority::TieBreak;

/// Settings for the `majority` command
#[derive(Debug, Clone, Default)]
pub struct MajorityConfig {
    /// Rule for choosing among several qualifying elements
    pub tie_break: TieBreak,
}

/// Majority settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMajority {
    pub tie_break: Option<String>,
}

impl MajorityConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileMajority>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            tie_break: file
                .tie_break
                .map(|s| TieBreak::from_str(&s))
                .unwrap_or_default(),
        }
    }
}
