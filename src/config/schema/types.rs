use crate::error::ConfigError;
use crate::media::MediaConfig;
use crate::providers::gemini::DEFAULT_BASE_URL;
use crate::providers::http_client::DEFAULT_TIMEOUT_SECS;
use crate::report::{DEFAULT_DATE_FORMAT, DEFAULT_REPORT_LOCALE, ReportStyle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml - computed, not serialized
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// Path to config.toml - computed, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Where the record store lives; `<base_dir>/data` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Language of CLI messages (`es` or `en`).
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub rubric: RubricConfig,
}

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_temperature() -> f64 {
    0.4
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_locale() -> String {
    "es".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            data_dir: None,
            locale: default_locale(),
            report: ReportConfig::default(),
            media: MediaConfig::default(),
            rubric: RubricConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// POSIX locale for the report date, e.g. `es_BO`.
    #[serde(default = "default_report_locale")]
    pub locale: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_report_locale() -> String {
    DEFAULT_REPORT_LOCALE.into()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: default_report_locale(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Tera template replacing the built-in rubric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,
}

impl Config {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(|| self.base_dir.join("data"), PathBuf::from)
    }

    pub fn report_style(&self) -> Result<ReportStyle, ConfigError> {
        ReportStyle::new(&self.report.locale, &self.report.date_format)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        self.report_style()?;
        Ok(())
    }
}
