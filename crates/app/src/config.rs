//! Runtime settings: defaults, then `kanji-drill.toml`, then environment,
//! then command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use services::ServicesConfig;
use services::stroke_order::DEFAULT_BASE_URL;
use thiserror::Error;

pub const CONFIG_FILE: &str = "kanji-drill.toml";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:kanji-drill.sqlite3";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{var} must be a boolean, got {raw:?}")]
    InvalidBool { var: &'static str, raw: String },
    #[error("invalid database url: {raw}")]
    InvalidDbUrl { raw: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub stroke_order_url: String,
    /// Skip all network lookups.
    pub offline: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            stroke_order_url: DEFAULT_BASE_URL.into(),
            offline: false,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

/// Optional keys accepted in the config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub database_url: Option<String>,
    pub stroke_order_url: Option<String>,
    pub offline: Option<bool>,
    pub log_filter: Option<String>,
}

impl FileSettings {
    /// Read `path`; a missing file is only an error when `required`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or parsed.
    pub fn read(path: &Path, required: bool) -> Result<Option<Self>, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&raw)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub database_url: Option<String>,
    pub stroke_order_url: Option<String>,
    pub offline: bool,
    pub log_filter: Option<String>,
}

impl Settings {
    /// Resolve settings from the config file, process environment, and flags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unreadable file or a malformed value.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let (path, required) = match &overrides.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };
        let file = FileSettings::read(&path, required)?;
        if file.is_some() {
            tracing::debug!(path = %path.display(), "loaded config file");
        }
        Self::layer(file, |key| std::env::var(key).ok(), overrides)
    }

    /// Apply the file, environment, and flag layers over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBool` for an unparseable `KANJI_OFFLINE`.
    pub fn layer(
        file: Option<FileSettings>,
        env: impl Fn(&str) -> Option<String>,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(file) = file {
            if let Some(v) = file.database_url {
                settings.database_url = v;
            }
            if let Some(v) = file.stroke_order_url {
                settings.stroke_order_url = v;
            }
            if let Some(v) = file.offline {
                settings.offline = v;
            }
            if let Some(v) = file.log_filter {
                settings.log_filter = v;
            }
        }

        if let Some(v) = env("KANJI_DB_URL") {
            settings.database_url = v;
        }
        if let Some(v) = env("KANJI_STROKE_URL") {
            settings.stroke_order_url = v;
        }
        if let Some(v) = env("KANJI_OFFLINE") {
            settings.offline = parse_bool("KANJI_OFFLINE", &v)?;
        }
        if let Some(v) = env("RUST_LOG") {
            settings.log_filter = v;
        }
        if let Some(v) = env("KANJI_LOG") {
            settings.log_filter = v;
        }

        if let Some(v) = &overrides.database_url {
            settings.database_url.clone_from(v);
        }
        if let Some(v) = &overrides.stroke_order_url {
            settings.stroke_order_url.clone_from(v);
        }
        if overrides.offline {
            settings.offline = true;
        }
        if let Some(v) = &overrides.log_filter {
            settings.log_filter.clone_from(v);
        }

        Ok(settings)
    }

    #[must_use]
    pub fn services_config(&self) -> ServicesConfig {
        if self.offline {
            return ServicesConfig::offline();
        }
        ServicesConfig {
            stroke_order_url: Some(self.stroke_order_url.clone()),
        }
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            raw: raw.to_string(),
        }),
    }
}

fn is_in_memory(url: &str) -> bool {
    url == "sqlite::memory:" || url.contains("mode=memory")
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDbUrl` for a blank value.
pub fn normalize_sqlite_url(raw: &str, base: &Path) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: raw.to_string(),
        });
    }
    if is_in_memory(trimmed) || trimmed.starts_with("sqlite://") {
        return Ok(trimmed.to_string());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    Ok(format!("sqlite://{}", absolute.display()))
}

/// Create the database file (and its directory) if it does not exist yet.
///
/// # Errors
///
/// Returns `ConfigError` when the URL has no path or the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if is_in_memory(db_url) {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        });
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
