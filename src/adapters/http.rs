use crate::domain::ports::PageSource;
use crate::utils::error::{EiError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Plain GET requests against the remote site. One attempt per URL, no retries.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| EiError::ConfigValidation {
            field: "source.request_timeout_seconds".to_string(),
            message: format!("failed to build HTTP client: {}", e),
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EiError::fetch_transport(url, &e))?;

        let status = response.status();
        tracing::debug!("{} -> {}", url, status);
        if !status.is_success() {
            return Err(EiError::fetch_status(url, status.as_u16()));
        }

        // Decoded with the charset the page declares, falling back to UTF-8.
        response.text().await.map_err(|e| {
            if e.is_decode() {
                EiError::Parse {
                    url: url.to_string(),
                    reason: format!("body could not be decoded: {}", e),
                }
            } else {
                EiError::fetch_transport(url, &e)
            }
        })
    }
}
