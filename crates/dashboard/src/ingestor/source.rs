use crate::{
    ingestor::{
        datasets::{Dataset, ReportingPeriod},
        error::FetchError,
    },
    settings::Settings,
};
use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

/// Raw snapshot transport. The pipeline only needs body text; transport
/// mechanics stay behind this seam so the rest of the crate can be driven
/// without a network.
#[automock]
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(
        &self,
        dataset: Dataset,
        period: &ReportingPeriod,
    ) -> Result<String, FetchError>;
}

/// Object-store gateway source. No retries and no caching: a failed request
/// propagates to the one chart that needed the dataset.
pub struct GatewaySource {
    client: reqwest::Client,
    base_url: String,
}

impl GatewaySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.source.base_url.clone())
    }
}

#[async_trait]
impl TextSource for GatewaySource {
    async fn fetch_text(
        &self,
        dataset: Dataset,
        period: &ReportingPeriod,
    ) -> Result<String, FetchError> {
        let url = dataset.locator(&self.base_url, period);
        debug!(%url, "Fetching dataset snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Http { url, source })
    }
}
