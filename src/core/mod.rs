pub mod engine;
pub mod fetcher;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{Article, ScrapeBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
