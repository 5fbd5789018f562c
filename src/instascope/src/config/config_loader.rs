use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_ENV_PREFIX, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL,
    DEFAULT_LOG_LEVEL,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn api_base_url(&self) -> Result<Url> {
        Url::parse(&self.api_base_url)
            .with_context(|| format!("invalid api_base_url '{}'", self.api_base_url))
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads defaults, then the per-user config file, then `path` when
    /// given, then `INSTASCOPE_*` environment variables.
    pub fn load_config(path: Option<&str>) -> Result<Config> {
        Self::load_from_sources(
            Self::user_config_file().as_deref(),
            path.map(Path::new),
            None,
        )
    }

    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// `environment` replaces the process environment when given.
    pub(crate) fn load_from_sources(
        user_file: Option<&Path>,
        explicit_file: Option<&Path>,
        environment: Option<Map<String, String>>,
    ) -> Result<Config> {
        let mut builder = RConfig::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        if let Some(user_file) = user_file {
            builder = builder.add_source(
                File::new(&user_file.to_string_lossy(), FileFormat::Toml).required(false),
            );
        }

        if let Some(explicit_file) = explicit_file {
            builder = builder.add_source(
                File::new(&explicit_file.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .prefix_separator("_")
                .source(environment),
        );

        let config: Config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;

        // fail early rather than on the first request
        config.api_base_url()?;

        Ok(config)
    }
}

