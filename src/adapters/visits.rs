use crate::adapters::ApiMessage;
use crate::config::toml_config::EndpointConfig;
use crate::core::display::format_en_in;
use crate::domain::ports::VisitCounter;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Deserialize)]
struct CountBody {
    count: u64,
}

/// Talks to the `/api/visits` route: POST increments, GET reads.
#[derive(Debug, Clone)]
pub struct HttpVisitCounter {
    client: Client,
    endpoint: String,
}

impl HttpVisitCounter {
    pub fn new(endpoint: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    async fn read_count(response: Response) -> Result<u64> {
        let status = response.status();
        if !status.is_success() {
            let body: ApiMessage = response.json().await.unwrap_or_default();
            return Err(SiteError::RemoteStatusError {
                status: status.as_u16(),
                message: body.describe("Failed to fetch count"),
            });
        }

        let text = response.text().await?;
        let body: CountBody = serde_json::from_str(&text)?;
        Ok(body.count)
    }
}

#[async_trait]
impl VisitCounter for HttpVisitCounter {
    async fn increment(&self) -> Result<u64> {
        tracing::debug!("Incrementing visit count at: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).send().await?;
        Self::read_count(response).await
    }

    async fn current(&self) -> Result<u64> {
        tracing::debug!("Reading visit count from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        Self::read_count(response).await
    }
}

/// Process-local counter. A single `fetch_add` per visit, so concurrent
/// increments are never lost.
#[derive(Debug, Default)]
pub struct InMemoryVisitCounter {
    count: AtomicU64,
}

impl InMemoryVisitCounter {
    pub fn new(start: u64) -> Self {
        Self {
            count: AtomicU64::new(start),
        }
    }
}

#[async_trait]
impl VisitCounter for InMemoryVisitCounter {
    async fn increment(&self) -> Result<u64> {
        Ok(self.count.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn current(&self) -> Result<u64> {
        Ok(self.count.load(Ordering::SeqCst))
    }
}

/// Footer text for the counter: `...` while loading, `---` when the
/// counter failed or is empty.
pub fn render_visit_count(count: Option<u64>) -> String {
    match count {
        None => "...".to_string(),
        Some(0) => "---".to_string(),
        Some(n) => format_en_in(n as f64, 0),
    }
}
