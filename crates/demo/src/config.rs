use dropdown_types::{DropdownConfig, DropdownError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Demo page config, embedded at compile time.
const DEMO_CONFIG: &str = include_str!("../demo.toml");

/// One labelled filter on the demo page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterEntry {
    pub label: String,
    #[serde(default)]
    pub dropdown: DropdownConfig,
}

/// Top-level structure of `demo.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub filter: Vec<FilterEntry>,
}

impl DemoConfig {
    pub fn parse(contents: &str) -> Result<Self, DropdownError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse the embedded config. A broken file leaves the page with a single
    /// empty filter rather than aborting.
    pub fn load() -> Self {
        Self::parse(DEMO_CONFIG).unwrap_or_else(|err| {
            warn!(%err, "demo.toml could not be parsed, using an empty filter");
            Self {
                filter: vec![FilterEntry {
                    label: "Filter".to_string(),
                    dropdown: DropdownConfig::default(),
                }],
            }
        })
    }
}
