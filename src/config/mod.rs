pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_output_formats, validate_path, validate_positive_number,
    validate_range, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; pubmed-scrape/0.1)";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pubmed-scrape")]
#[command(about = "Scrape article metadata from PubMed URLs listed in a CSV file")]
pub struct CliConfig {
    /// Path to the input CSV file containing URLs to be scraped
    #[arg(long)]
    pub input_file: String,

    /// Path to the output CSV file where the scraped data will be saved
    #[arg(long)]
    pub output_file: String,

    /// Delay between each request in seconds, to avoid overloading PubMed
    #[arg(long, default_value = "1")]
    pub delay: u64,

    /// Maximum number of concurrent requests
    #[arg(long, default_value = "5")]
    pub max_requests: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output formats to write (csv, json)
    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub output_formats: Vec<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable system monitoring
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn request_delay_secs(&self) -> u64 {
        self.delay
    }

    fn max_concurrent_requests(&self) -> usize {
        self.max_requests
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_extension("input_file", &self.input_file, &["csv"])?;
        validate_path("output_file", &self.output_file)?;
        validate_range("delay", self.delay, 0, 60)?;
        validate_positive_number("max_requests", self.max_requests, 1)?;
        validate_range("max_requests", self.max_requests, 1, 100)?;
        validate_range("timeout", self.timeout, 1, 300)?;
        validate_output_formats("output_formats", &self.output_formats)?;
        Ok(())
    }
}
