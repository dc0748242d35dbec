use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Host-shell policy knobs; everything here has a default so a
/// missing config file is not an error.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PncConfig {
    /// Reject arcs whose endpoints resolve to the wrong node kind
    /// with a dedicated diagnosis.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_report")]
    pub report: String,
}

impl Default for PncConfig {
    fn default() -> Self {
        Self {
            strict: false,
            report: default_report(),
        }
    }
}

impl PncConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: PncConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_report() -> String {
    "classification.json".to_string()
}
