use crate::core::links::extract_links;
use crate::core::table::parse_table;
use crate::domain::model::{EconomicRegionRecord, ResponsePayload};
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use url::Url;

/// Immutable settings handed to the [`Aggregator`] at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeSettings {
    pub base_url: String,
    pub postal_code_path: String,
    pub discovery_table_id: String,
    pub data_table_id: String,
    /// Sub-pages fetched at once. 1 means strictly sequential.
    pub concurrent_requests: usize,
}

/// Resolves a postal code to its economic region records.
#[async_trait]
pub trait RegionLookup: Send + Sync {
    async fn process(&self, postal_code: &str) -> Result<ResponsePayload>;
}

pub struct Aggregator<S: PageSource> {
    source: S,
    settings: ScrapeSettings,
}

impl<S: PageSource> Aggregator<S> {
    pub fn new(source: S, settings: ScrapeSettings) -> Self {
        Self { source, settings }
    }

    /// The postal code is forwarded verbatim.
    pub fn discovery_url(&self, postal_code: &str) -> String {
        format!(
            "{}{}{}",
            self.settings.base_url, self.settings.postal_code_path, postal_code
        )
    }

    /// Absolute http(s) links are used as-is; anything else is appended to the base URL.
    pub fn page_url(&self, link: &str) -> String {
        match Url::parse(link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => link.to_string(),
            _ => format!("{}{}", self.settings.base_url, link),
        }
    }

    async fn page_records(&self, url: String) -> Result<Vec<EconomicRegionRecord>> {
        parse_table(&self.source, &url, &self.settings.data_table_id).await
    }
}

#[async_trait]
impl<S: PageSource> RegionLookup for Aggregator<S> {
    async fn process(&self, postal_code: &str) -> Result<ResponsePayload> {
        let discovery_url = self.discovery_url(postal_code);
        tracing::info!("Looking up economic regions for postal code {}", postal_code);

        let links = extract_links(
            &self.source,
            &discovery_url,
            &self.settings.discovery_table_id,
        )
        .await?;

        let urls: Vec<String> = links.iter().map(|link| self.page_url(link)).collect();

        // `buffered` yields in input order, so the first error seen is the first in
        // discovery order and nothing gathered before it escapes.
        let pages: Vec<Vec<EconomicRegionRecord>> = stream::iter(urls)
            .map(|url| self.page_records(url))
            .buffered(self.settings.concurrent_requests.max(1))
            .try_collect::<Vec<_>>()
            .await?;

        let data: Vec<EconomicRegionRecord> = pages.into_iter().flatten().collect();
        tracing::info!(
            "Postal code {}: {} records from {} pages",
            postal_code,
            data.len(),
            links.len()
        );

        Ok(ResponsePayload {
            postal_code: postal_code.to_string(),
            data,
        })
    }
}
