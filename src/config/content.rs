//! Content source configuration

use serde::Deserialize;

/// Where catalogs and result content are read from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Reference content embedded in the binary
    #[default]
    Static,
    /// Content tables in PostgreSQL
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: ContentSource,

    /// Fill empty content tables from the embedded content on startup
    #[serde(default = "default_seed_on_start")]
    pub seed_on_start: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::default(),
            seed_on_start: default_seed_on_start(),
        }
    }
}

fn default_seed_on_start() -> bool {
    true
}
