use crate::adapters::ApiMessage;
use crate::config::toml_config::EndpointConfig;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::ContactSink;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Posts contact submissions as JSON to the site's intake route.
#[derive(Debug, Clone)]
pub struct HttpContactSink {
    client: Client,
    endpoint: String,
}

impl HttpContactSink {
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
}

#[async_trait]
impl ContactSink for HttpContactSink {
    async fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        submission.validate()?;

        tracing::debug!("Posting contact submission to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Contact endpoint responded with: {}", status);

        if status == StatusCode::OK {
            tracing::info!("Contact submission from {} accepted", submission.name);
            return Ok(());
        }

        let body: ApiMessage = response.json().await.unwrap_or_default();
        match status {
            StatusCode::BAD_REQUEST => Err(SiteError::ContactValidationError {
                field: "form".to_string(),
                message: body.describe("Missing required fields"),
            }),
            other => {
                tracing::warn!("Contact submission failed with status {}", other);
                Err(SiteError::RemoteStatusError {
                    status: other.as_u16(),
                    message: body.describe("Error submitting form"),
                })
            }
        }
    }
}
