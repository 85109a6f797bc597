//! JSON runtime configuration for the demo pipeline.

use crate::equalize::EqualizeParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub equalize: EqualizeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EqualizeConfig {
    pub neighborhood_size: Option<usize>,
    pub levels: Option<usize>,
}

impl EqualizeConfig {
    pub fn resolve(&self) -> EqualizeParams {
        let mut params = EqualizeParams::default();
        if let Some(v) = self.neighborhood_size {
            params.neighborhood_size = v;
        }
        if let Some(v) = self.levels {
            params.levels = v;
        }
        params
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "enhanced_image")]
    pub enhanced_image: PathBuf,
    #[serde(default)]
    pub side_by_side_image: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::EqualizeConfig;

    #[test]
    fn resolve_falls_back_to_defaults() {
        let params = EqualizeConfig::default().resolve();
        assert_eq!(params.neighborhood_size, 3);
        assert_eq!(params.levels, 256);
    }

    #[test]
    fn resolve_applies_overrides() {
        let config = EqualizeConfig {
            neighborhood_size: Some(7),
            levels: Some(64),
        };
        let params = config.resolve();
        assert_eq!(params.neighborhood_size, 7);
        assert_eq!(params.levels, 64);
    }
}
