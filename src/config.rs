use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::loader::LoaderOptions;
use crate::data::model::FilterBounds;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "GEOTHERMAL_DASHBOARD_CONFIG";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field has a default, so an empty `{}` file is
/// valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Drilling log loaded at startup.
    pub csv_path: PathBuf,
    #[serde(flatten)]
    pub loader: LoaderOptions,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    /// Bounds applied at startup instead of the observed column ranges.
    pub initial_bounds: Option<FilterBounds>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("geothermal.csv"),
            loader: LoaderOptions::default(),
            window_size: [1280.0, 900.0],
            initial_bounds: None,
        }
    }
}

impl DashboardConfig {
    /// Read a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve the configuration from `$GEOTHERMAL_DASHBOARD_CONFIG` (if set)
    /// and the command line: the first positional argument overrides
    /// `csv_path`.
    pub fn from_env(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Using configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        if let Some(path) = args.nth(1) {
            config.csv_path = PathBuf::from(path);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.loader.header_row, 1);
    }

    #[test]
    fn fields_override_defaults() {
        let config = DashboardConfig::from_json(
            r#"{
                "csv_path": "logs/forge.csv",
                "header_row": 2,
                "initial_bounds": {
                    "min_depth": 0.0, "max_depth": 5000.0,
                    "min_rop": 0.0, "max_rop": 80.0,
                    "min_wob": 0.0, "max_wob": 40.0
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.csv_path, PathBuf::from("logs/forge.csv"));
        assert_eq!(config.loader.header_row, 2);
        assert_eq!(config.window_size, [1280.0, 900.0]);
        assert_eq!(config.initial_bounds.map(|b| b.max_rop), Some(80.0));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(DashboardConfig::from_json("{ \"header_row\": \"two\" }").is_err());
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = DashboardConfig::from_file(Path::new("no/such/config.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/config.json"));
    }
}
