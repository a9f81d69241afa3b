use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::utils::get_project_dirs;

#[derive(Debug, Deserialize)]
#[non_exhaustive]
pub struct LoggerConfig {
    /// Whether to write a log file at all.
    /// Default value is true.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Most verbose level written to the log file.
    /// Default value is `info`.
    #[serde(default = "default_level")]
    pub level: LevelFilter,
    /// Where to write the log file, `log.txt` in the cache directory when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            level: default_level(),
            file: Default::default(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_level() -> LevelFilter {
    LevelFilter::Info
}

#[derive(Debug, Default, Deserialize)]
#[non_exhaustive]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
    /// Why the configuration file was ignored, reported once the logger is up.
    #[serde(skip)]
    pub load_error: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let Some(project_dirs) = get_project_dirs() else {
            return Self::default();
        };
        let config_path = project_dirs.config_dir().join("config.toml");
        match Self::from_path(&config_path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => Self {
                load_error: Some(format!("{}: {e}", config_path.display())),
                ..Default::default()
            },
        }
    }

    /// Reads a config file. A missing file is not an error.
    pub fn from_path(path: &Path) -> Result<Option<Self>, String> {
        let config_string = match std::fs::read_to_string(path) {
            Ok(config_string) => config_string,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.to_string()),
        };
        toml::from_str::<Self>(&config_string)
            .map(Some)
            .map_err(|e| e.to_string())
    }
}
