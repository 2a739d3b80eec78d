use crate::config::DEFAULT_USER_AGENT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{
    validate_file_extension, validate_output_formats, validate_path, validate_positive_number,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub fetch: Option<FetchConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// CSV file with a `url` column.
    pub input_file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub delay_seconds: Option<u64>,
    pub max_requests: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_file: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can flag them later.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScrapeError::ProcessingError {
            message: format!("env substitution pattern failed: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_file_extension("source.input_file", &self.source.input_file, &["csv"])?;
        validate_path("load.output_file", &self.load.output_file)?;
        validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(fetch) = &self.fetch {
            if let Some(max_requests) = fetch.max_requests {
                validate_positive_number("fetch.max_requests", max_requests, 1)?;
            }
            if let Some(delay) = fetch.delay_seconds {
                validate_range("fetch.delay_seconds", delay, 0, 60)?;
            }
            if let Some(timeout) = fetch.timeout_seconds {
                validate_range("fetch.timeout_seconds", timeout, 1, 300)?;
            }
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn delay_seconds(&self) -> u64 {
        self.fetch
            .as_ref()
            .and_then(|f| f.delay_seconds)
            .unwrap_or(1)
    }

    pub fn max_requests(&self) -> usize {
        self.fetch
            .as_ref()
            .and_then(|f| f.max_requests)
            .unwrap_or(5)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.fetch
            .as_ref()
            .and_then(|f| f.timeout_seconds)
            .unwrap_or(30)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.source.input_file
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }

    fn request_delay_secs(&self) -> u64 {
        self.delay_seconds()
    }

    fn max_concurrent_requests(&self) -> usize {
        self.max_requests()
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_seconds()
    }

    fn user_agent(&self) -> &str {
        self.fetch
            .as_ref()
            .and_then(|f| f.user_agent.as_deref())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
