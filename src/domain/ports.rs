use crate::domain::model::ScrapeBatch;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_file(&self) -> &str;
    /// Politeness delay between requests, in seconds.
    fn request_delay_secs(&self) -> u64;
    /// Upper bound on in-flight HTTP requests.
    fn max_concurrent_requests(&self) -> usize;
    fn request_timeout_secs(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn output_formats(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Read the list of article URLs from the input file.
    async fn extract(&self) -> Result<Vec<String>>;
    /// Fetch and parse every URL into an article record.
    async fn transform(&self, urls: Vec<String>) -> Result<ScrapeBatch>;
    /// Write the records to the configured outputs; returns the primary path.
    async fn load(&self, batch: ScrapeBatch) -> Result<String>;
}
