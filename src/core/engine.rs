use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        let started_at = Utc::now();
        println!("Starting PubMed scrape...");
        self.monitor.log_stats("Startup");

        // Extract
        println!("Loading URL list...");
        let urls = self.pipeline.extract().await?;
        println!("Loaded {} URLs", urls.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Scraping article pages...");
        let batch = self.pipeline.transform(urls).await?;
        println!(
            "Scraped {} articles ({} fetches failed)",
            batch.articles.len(),
            batch.failed_fetches
        );
        self.monitor.log_stats("Transform");

        // Preview, matching the collection notebook's print_results
        for article in batch.articles.iter().take(5) {
            tracing::info!(
                "📄 {} -> {}",
                article.url,
                article.title.as_deref().unwrap_or("(no title)")
            );
        }

        let article_count = batch.articles.len();

        // Load
        println!("Saving results...");
        let output_path = self.pipeline.load(batch).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        let elapsed_secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
        println!(
            "It took {} to find {} articles",
            format_elapsed(elapsed_secs),
            article_count
        );
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

/// Human-readable elapsed time: seconds below a minute, minutes below an
/// hour, hours beyond that.
pub fn format_elapsed(elapsed_secs: f64) -> String {
    if elapsed_secs < 60.0 {
        format!("{:.1} seconds", elapsed_secs)
    } else if elapsed_secs < 3600.0 {
        format!("{:.1} minutes", elapsed_secs / 60.0)
    } else {
        format!("{:.1} hours", elapsed_secs / 3600.0)
    }
}
