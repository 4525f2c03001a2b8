use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "t9search";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const DEFAULT_NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_mode: DefaultMode,
    pub output: OutputConfig,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub separator: String,
    pub not_found: String,
}

/// Mode used for `t9search NUMBER` when no switch is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultMode {
    #[default]
    Exact,
    Subsequence,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: DefaultMode::Exact,
            output: OutputConfig {
                separator: DEFAULT_SEPARATOR.to_string(),
                not_found: DEFAULT_NOT_FOUND.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid output.{field} value: {reason}")]
    InvalidOutputField { field: &'static str, reason: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_mode: Option<DefaultMode>,
    output: Option<OutputFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    separator: Option<String>,
    not_found: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(mode) = parsed.default_mode {
        config.default_mode = mode;
    }

    if let Some(output) = parsed.output {
        if let Some(separator) = output.separator {
            if separator.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidOutputField {
                    field: "separator",
                    reason: "must be a single line".to_string(),
                });
            }
            config.output.separator = separator;
        }
        if let Some(not_found) = output.not_found {
            if not_found.trim().is_empty() {
                return Err(ConfigError::InvalidOutputField {
                    field: "not_found",
                    reason: "cannot be empty".to_string(),
                });
            }
            if not_found.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidOutputField {
                    field: "not_found",
                    reason: "must be a single line".to_string(),
                });
            }
            config.output.not_found = not_found;
        }
    }

    Ok(config)
}
