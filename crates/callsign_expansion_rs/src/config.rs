use std::path::{Path, PathBuf};

use aviation_helper_rs::airlines::DEFAULT_AIRLINE_TABLE_PATH;
use serde::Deserialize;

use crate::{errors::Error, level::ExpansionLevel};

/// Expander settings, e.g.
///
/// ```text
/// (
///     airline_table: "resources/known-strings/callsign_table.tsv",
///     level: special,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExpanderConfig {
    pub airline_table: PathBuf,
    #[serde(default)]
    pub level: ExpansionLevel,
}

impl ExpanderConfig {
    /// Load expander configuration from a RON file. A relative `airline_table`
    /// is resolved against the directory of the config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_ron_str(&contents)?;
        if config.airline_table.is_relative() {
            if let Some(dir) = path.parent() {
                config.airline_table = dir.join(&config.airline_table);
            }
        }
        Ok(config)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, Error> {
        let config: ExpanderConfig = ron::from_str(contents)?;
        Ok(config)
    }
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            airline_table: PathBuf::from(DEFAULT_AIRLINE_TABLE_PATH),
            level: ExpansionLevel::default(),
        }
    }
}
