//! Volunteer/event matching configuration.

use serde::{Deserialize, Serialize};

/// Matching behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Whether the same volunteer/event pair may be recorded more than once.
    /// When `false`, a repeated assignment is rejected as a conflict.
    #[serde(default = "default_allow_duplicates")]
    pub allow_duplicates: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: default_allow_duplicates(),
        }
    }
}

fn default_allow_duplicates() -> bool {
    true
}
