use serde::{Deserialize, Serialize};

use crate::format::locale::Locale;

/// User-configurable settings, stored inside the local profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Language and digit script for every formatted string.
    #[serde(default)]
    pub locale: Locale,

    /// Base URL of the replication backend (e.g. "https://example.com").
    /// Savings are only kept locally while this is unset.
    #[serde(default)]
    pub server_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            server_url: None,
        }
    }
}
