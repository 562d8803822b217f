use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::{AppConfig, ConfigFile};

const CONFIG_DIR_NAME: &str = "article-params";
const CONFIG_FILE_NAME: &str = "config.json";

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config used at start-up, falling back to defaults on any
/// failure.
pub(crate) fn load_initial_config() -> AppConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("config file invalid: {message}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config read failed: {err}");
            AppConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match parse_config(&data) {
        Ok(file) => file,
        Err(err) => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    Ok(ConfigLoad::new(
        AppConfig::from_file(parsed),
        ConfigLoadStatus::Loaded,
    ))
}

fn parse_config(data: &str) -> Result<ConfigFile, ConfigError> {
    Ok(serde_json::from_str::<ConfigFile>(data)?)
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
    }

    std::env::temp_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
