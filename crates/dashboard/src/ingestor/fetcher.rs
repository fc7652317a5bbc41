use crate::ingestor::{
    datasets::{Dataset, ReportingPeriod},
    parse,
    records::{
        ActiveNodeSample, ActiveNodeStat, CountryStat, DurationSample, EarningsByCountryRow,
        NodesByCountryRow, RatioSample, RetrievalSample, TrafficByCountryRow, TrafficSample,
    },
    source::TextSource,
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Fetch-and-parse front end for the dataset registry: one typed method per
/// dataset, each fetching the snapshot text and running the matching parser.
pub struct Fetcher<S> {
    source: Arc<S>,
}

impl<S> Clone for Fetcher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: TextSource> Fetcher<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    async fn text(&self, dataset: Dataset, period: &ReportingPeriod) -> Result<String> {
        self.source
            .fetch_text(dataset, period)
            .await
            .with_context(|| format!("Failed to fetch {dataset} for {period}"))
    }

    pub async fn active_nodes(&self, period: &ReportingPeriod) -> Result<Vec<ActiveNodeSample>> {
        let text = self.text(Dataset::ActiveNodes, period).await?;
        parse::active_nodes(&text).context("Failed to parse active-node samples")
    }

    pub async fn active_node_stats(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<ActiveNodeStat>> {
        let text = self.text(Dataset::ActiveNodeStats, period).await?;
        parse::active_node_stats(&text).context("Failed to parse active-node stats")
    }

    pub async fn country_stats(&self, period: &ReportingPeriod) -> Result<Vec<CountryStat>> {
        let text = self.text(Dataset::CountryStats, period).await?;
        parse::country_stats(&text).context("Failed to parse country stats")
    }

    pub async fn active_nodes_by_country(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<NodesByCountryRow>> {
        let text = self.text(Dataset::ActiveNodesByCountry, period).await?;
        parse::active_nodes_by_country(&text).context("Failed to parse per-country node counts")
    }

    pub async fn traffic_by_country(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<TrafficByCountryRow>> {
        let text = self.text(Dataset::TrafficByCountry, period).await?;
        parse::traffic_by_country(&text).context("Failed to parse per-country traffic")
    }

    pub async fn earnings_by_country(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<EarningsByCountryRow>> {
        let text = self.text(Dataset::EarningsByCountry, period).await?;
        parse::earnings_by_country(&text).context("Failed to parse per-country earnings")
    }

    pub async fn traffic(&self, period: &ReportingPeriod) -> Result<Vec<TrafficSample>> {
        let text = self.text(Dataset::Traffic, period).await?;
        parse::traffic(&text).context("Failed to parse traffic samples")
    }

    pub async fn retrievals(&self, period: &ReportingPeriod) -> Result<Vec<RetrievalSample>> {
        let text = self.text(Dataset::Retrievals, period).await?;
        parse::retrievals(&text).context("Failed to parse retrieval samples")
    }

    pub async fn retrieval_durations(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<DurationSample>> {
        let text = self.text(Dataset::RetrievalDurations, period).await?;
        parse::retrieval_durations(&text).context("Failed to parse retrieval durations")
    }

    pub async fn traffic_ratio(&self, period: &ReportingPeriod) -> Result<Vec<RatioSample>> {
        let text = self.text(Dataset::TrafficRatio, period).await?;
        parse::traffic_ratio(&text).context("Failed to parse traffic-ratio samples")
    }
}
