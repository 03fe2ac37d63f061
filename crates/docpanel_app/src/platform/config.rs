//! Panel configuration loaded from a RON file with environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use docpanel_core::Locale;
use docpanel_engine::ClientSettings;
use log::LevelFilter;
use panel_logging::parse_level_filter;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "docpanel.ron";

/// Upper bound for the health interval; larger values would overflow timer
/// deadlines.
const MAX_HEALTH_CHECK_INTERVAL_SECS: u64 = 86_400;

const ENV_BASE_URL: &str = "DOCPANEL_BASE_URL";
const ENV_API_KEY: &str = "DOCPANEL_API_KEY";
const ENV_LOCALE: &str = "DOCPANEL_LOCALE";
const ENV_LOG_LEVEL: &str = "DOCPANEL_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Language tag such as `en` or `zh-CN`.
    pub locale: String,
    pub health_check_interval_secs: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
    pub log_level: String,
    /// Directory holding the persisted view preferences.
    pub state_dir: PathBuf,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            api_key: None,
            locale: "en".to_string(),
            health_check_interval_secs: 15,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            log_file: PathBuf::from("./docpanel.log"),
            log_level: "info".to_string(),
            state_dir: PathBuf::from("."),
        }
    }
}

impl PanelConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }

    /// Unknown tags fall back to English.
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.locale).unwrap_or_default()
    }

    pub fn health_check_interval(&self) -> Duration {
        Duration::from_secs(
            self.health_check_interval_secs
                .clamp(1, MAX_HEALTH_CHECK_INTERVAL_SECS),
        )
    }

    pub fn log_level(&self) -> LevelFilter {
        parse_level_filter(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Applies `DOCPANEL_*` overrides; blank values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(locale) = lookup(ENV_LOCALE) {
            self.locale = locale;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
    }
}

/// Reads `path`, falling back to defaults when the file does not exist, then
/// applies environment overrides.
pub fn load_config(path: &Path) -> Result<PanelConfig, ConfigError> {
    let mut config = match fs::read_to_string(path) {
        Ok(text) => parse_config(path, &text)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => PanelConfig::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn parse_config(path: &Path, text: &str) -> Result<PanelConfig, ConfigError> {
    ron::from_str(text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
