use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// HTTP front-end for article pages: one shared client, a semaphore bounding
/// in-flight requests, and a politeness delay slept while the permit is held
/// so the effective rate stays at `max_requests` pages per `delay` seconds.
pub struct PageFetcher {
    client: Client,
    semaphore: Arc<Semaphore>,
    delay: Duration,
}

impl PageFetcher {
    pub fn new(
        max_requests: usize,
        delay_secs: u64,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            semaphore: Arc::new(Semaphore::new(max_requests.max(1))),
            delay: Duration::from_secs(delay_secs),
        })
    }

    /// Fetch one page. Transport failures (timeout, DNS, refused connection)
    /// are logged and reported as `None`; the caller keeps the row with
    /// empty fields. The body is returned whatever the HTTP status — an
    /// error page simply matches none of the selectors downstream.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => return None, // semaphore closed, shutting down
        };

        let outcome = match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    tracing::warn!("HTTP {} from {}", status, url);
                }
                match response.text().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        tracing::warn!("Failed to read body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                None
            }
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        outcome
    }
}
