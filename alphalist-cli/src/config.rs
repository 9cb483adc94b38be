use std::path::Path;

use alphalist_core::ListOptions;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The field to group by when `--field` isn't given.
    pub field: Option<String>,
    pub list: ListOptions,
}
impl Config {
    pub const FILENAME: &str = "alphalist.toml";

    /// Loads the config at `path`, falling back to the defaults if it doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
