//! Runtime configuration for GuideFlow storage locations.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the GuideFlow core.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted state namespaces.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Loads configuration from defaults, an optional config file and
    /// `GUIDEFLOW_*` environment variables, in increasing precedence.
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default(
            "data_dir",
            default_data_dir().to_string_lossy().into_owned(),
        )?;
        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        builder
            .add_source(Environment::with_prefix("GUIDEFLOW"))
            .build()?
            .try_deserialize()
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("guideflow"))
        .unwrap_or_else(|| PathBuf::from(".guideflow"))
}
