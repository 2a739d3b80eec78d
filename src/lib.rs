pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{engine::ScrapeEngine, pipeline::PubmedPipeline};
pub use domain::model::{Article, ScrapeBatch};
pub use utils::error::{Result, ScrapeError};
