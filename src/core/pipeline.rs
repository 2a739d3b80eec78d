use crate::core::fetcher::PageFetcher;
use crate::core::parser::ArticleExtractor;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Article, ScrapeBatch};
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::validate_url;
use std::path::Path;
use std::sync::Arc;

const URL_COLUMN: &str = "url";

pub struct PubmedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: Arc<PageFetcher>,
    extractor: Arc<ArticleExtractor>,
}

impl<S: Storage, C: ConfigProvider> PubmedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = PageFetcher::new(
            config.max_concurrent_requests(),
            config.request_delay_secs(),
            config.request_timeout_secs(),
            config.user_agent(),
        )?;

        Ok(Self {
            storage,
            config,
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(ArticleExtractor::new()?),
        })
    }

    fn json_output_path(&self) -> String {
        Path::new(self.config.output_file())
            .with_extension("json")
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PubmedPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading URL list from: {}", self.config.input_file());
        let raw = self.storage.read_file(self.config.input_file()).await?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());
        let url_index = reader
            .headers()?
            .iter()
            .position(|header| header.trim() == URL_COLUMN)
            .ok_or_else(|| ScrapeError::MissingColumnError {
                column: URL_COLUMN.to_string(),
            })?;

        let mut urls = Vec::new();
        for record in reader.records() {
            let record = record?;
            let Some(url) = record.get(url_index).map(str::trim) else {
                continue;
            };
            if url.is_empty() {
                continue;
            }
            if let Err(e) = validate_url(URL_COLUMN, url) {
                // Kept anyway so output rows stay 1:1 with input rows; the
                // fetch will fail and produce an empty record.
                tracing::warn!("Suspicious URL in input: {}", e);
            }
            urls.push(url.to_string());
        }

        Ok(urls)
    }

    async fn transform(&self, urls: Vec<String>) -> Result<ScrapeBatch> {
        let total = urls.len();
        tracing::debug!(
            "Scraping {} pages ({} concurrent, {}s delay)",
            total,
            self.config.max_concurrent_requests(),
            self.config.request_delay_secs()
        );

        let mut handles = Vec::with_capacity(total);
        for url in urls {
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);
            handles.push(tokio::spawn(async move {
                match fetcher.fetch(&url).await {
                    Some(html) => (extractor.extract(&url, &html), true),
                    None => (Article::empty(url), false),
                }
            }));
        }

        let mut articles = Vec::with_capacity(total);
        let mut failed_fetches = 0;
        for handle in handles {
            let (article, fetched) =
                handle.await.map_err(|e| ScrapeError::ProcessingError {
                    message: format!("Scrape task panicked: {}", e),
                })?;
            if !fetched {
                failed_fetches += 1;
            }
            articles.push(article);
        }

        if failed_fetches > 0 {
            tracing::warn!("{}/{} pages could not be fetched", failed_fetches, total);
        }

        Ok(ScrapeBatch {
            articles,
            failed_fetches,
        })
    }

    async fn load(&self, batch: ScrapeBatch) -> Result<String> {
        let formats = self.config.output_formats();
        let write_csv = formats.iter().any(|f| f == "csv");
        let write_json = formats.iter().any(|f| f == "json");

        let csv_path = self.config.output_file().to_string();

        if write_csv {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for article in &batch.articles {
                writer.serialize(article)?;
            }
            writer.flush()?;
            let bytes = writer
                .into_inner()
                .map_err(|e| ScrapeError::ProcessingError {
                    message: format!("CSV writer failed: {}", e),
                })?;

            tracing::debug!("Writing {} bytes of CSV to {}", bytes.len(), csv_path);
            self.storage.write_file(&csv_path, &bytes).await?;
        }

        if write_json {
            let json_path = self.json_output_path();
            let json = serde_json::to_string_pretty(&batch.articles)?;
            tracing::debug!("Writing {} bytes of JSON to {}", json.len(), json_path);
            self.storage.write_file(&json_path, json.as_bytes()).await?;
        }

        if write_csv {
            Ok(csv_path)
        } else {
            Ok(self.json_output_path())
        }
    }
}
