//! The dashboard's chart registry and per-chart pipeline.
//!
//! Every chart is a [`ChartKind`] variant dispatching to exactly one series
//! transformer, so adding a chart is a compile-checked match arm rather
//! than a runtime lookup that can silently miss.

use crate::{
    ingestor::{
        datasets::{Dataset, ReportingPeriod},
        fetcher::Fetcher,
        source::TextSource,
    },
    processor::{
        by_country, country_stats, distribution, figure::Figure, node_age, node_traffic, ratios,
        retrievals, world_map,
    },
};
use anyhow::Result;
use clap::ValueEnum;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    ActiveNodesAndTraffic,
    Retrievals,
    RetrievalDurations,
    TrafficRatio,
    NodesWithoutTraffic,
    NodesByCountry,
    CountryRanking,
    NodeDistribution,
    NodeAgeHistogram,
    NodeAgeCorrelation,
    WorldMap,
}

impl ChartKind {
    pub const fn all() -> [Self; 11] {
        [
            Self::ActiveNodesAndTraffic,
            Self::Retrievals,
            Self::RetrievalDurations,
            Self::TrafficRatio,
            Self::NodesWithoutTraffic,
            Self::NodesByCountry,
            Self::CountryRanking,
            Self::NodeDistribution,
            Self::NodeAgeHistogram,
            Self::NodeAgeCorrelation,
            Self::WorldMap,
        ]
    }

    /// Stable identifier used for output file names and placeholder
    /// bindings.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::ActiveNodesAndTraffic => "active-nodes-and-traffic",
            Self::Retrievals => "retrievals",
            Self::RetrievalDurations => "retrieval-durations",
            Self::TrafficRatio => "traffic-ratio",
            Self::NodesWithoutTraffic => "nodes-without-traffic",
            Self::NodesByCountry => "nodes-by-country",
            Self::CountryRanking => "country-ranking",
            Self::NodeDistribution => "node-distribution",
            Self::NodeAgeHistogram => "node-age-histogram",
            Self::NodeAgeCorrelation => "node-age-correlation",
            Self::WorldMap => "world-map",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::ActiveNodesAndTraffic => "Active nodes and network traffic",
            Self::Retrievals => "Network retrievals",
            Self::RetrievalDurations => "Retrieval duration percentiles",
            Self::TrafficRatio => "Paid traffic ratio",
            Self::NodesWithoutTraffic => "Active nodes without traffic",
            Self::NodesByCountry => "Nodes, traffic and earnings by country",
            Self::CountryRanking => "Earnings per node by country",
            Self::NodeDistribution => "Earnings and traffic distribution",
            Self::NodeAgeHistogram => "Node age",
            Self::NodeAgeCorrelation => "Node age correlation",
            Self::WorldMap => "Active nodes on the world map",
        }
    }

    /// Datasets this chart consumes.
    pub const fn datasets(&self) -> &'static [Dataset] {
        match self {
            Self::ActiveNodesAndTraffic => &[Dataset::ActiveNodes, Dataset::Traffic],
            Self::Retrievals => &[Dataset::Retrievals],
            Self::RetrievalDurations => &[Dataset::RetrievalDurations],
            Self::TrafficRatio => &[Dataset::TrafficRatio],
            Self::NodesWithoutTraffic => &[Dataset::ActiveNodes],
            Self::NodesByCountry => &[
                Dataset::ActiveNodesByCountry,
                Dataset::TrafficByCountry,
                Dataset::EarningsByCountry,
            ],
            Self::CountryRanking => &[Dataset::CountryStats],
            Self::NodeDistribution => &[Dataset::ActiveNodeStats],
            Self::NodeAgeHistogram => &[Dataset::ActiveNodeStats],
            Self::NodeAgeCorrelation => &[Dataset::ActiveNodeStats],
            Self::WorldMap => &[Dataset::CountryStats],
        }
    }

    /// Placeholder scaffold: the chart's transform applied to empty record
    /// sequences, so axes and legend are in place before any data arrives.
    pub fn empty_figure(&self) -> Figure {
        match self {
            Self::ActiveNodesAndTraffic => node_traffic::active_nodes_and_traffic(&[], &[]),
            Self::Retrievals => retrievals::retrievals(&[]),
            Self::RetrievalDurations => retrievals::retrieval_durations(&[]),
            Self::TrafficRatio => ratios::traffic_ratio(&[]),
            Self::NodesWithoutTraffic => ratios::nodes_without_traffic(&[]),
            Self::NodesByCountry => by_country::active_nodes_by_country(&[], &[], &[]),
            Self::CountryRanking => country_stats::earnings_per_node(&[]),
            Self::NodeDistribution => distribution::node_distribution(&[]),
            Self::NodeAgeHistogram => node_age::node_age_histogram(&[]),
            Self::NodeAgeCorrelation => node_age::node_age_correlation(&[]),
            Self::WorldMap => world_map::nodes_on_map(&[]),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Build one chart's renderer payload: fetch the datasets the chart needs
/// concurrently, parse, transform.
///
/// Within one chart the pipeline is strictly sequential; across charts,
/// independent calls interleave freely at the fetch awaits and share no
/// mutable state.
pub async fn build_figure<S: TextSource>(
    fetcher: &Fetcher<S>,
    kind: ChartKind,
    period: &ReportingPeriod,
) -> Result<Figure> {
    let figure = match kind {
        ChartKind::ActiveNodesAndTraffic => {
            let (nodes, traffic) =
                tokio::try_join!(fetcher.active_nodes(period), fetcher.traffic(period))?;
            node_traffic::active_nodes_and_traffic(&nodes, &traffic)
        }
        ChartKind::Retrievals => retrievals::retrievals(&fetcher.retrievals(period).await?),
        ChartKind::RetrievalDurations => {
            retrievals::retrieval_durations(&fetcher.retrieval_durations(period).await?)
        }
        ChartKind::TrafficRatio => ratios::traffic_ratio(&fetcher.traffic_ratio(period).await?),
        ChartKind::NodesWithoutTraffic => {
            ratios::nodes_without_traffic(&fetcher.active_nodes(period).await?)
        }
        ChartKind::NodesByCountry => {
            let (nodes, traffic, earnings) = tokio::try_join!(
                fetcher.active_nodes_by_country(period),
                fetcher.traffic_by_country(period),
                fetcher.earnings_by_country(period)
            )?;
            by_country::active_nodes_by_country(&nodes, &traffic, &earnings)
        }
        ChartKind::CountryRanking => {
            country_stats::earnings_per_node(&fetcher.country_stats(period).await?)
        }
        ChartKind::NodeDistribution => {
            distribution::node_distribution(&fetcher.active_node_stats(period).await?)
        }
        ChartKind::NodeAgeHistogram => {
            node_age::node_age_histogram(&fetcher.active_node_stats(period).await?)
        }
        ChartKind::NodeAgeCorrelation => {
            node_age::node_age_correlation(&fetcher.active_node_stats(period).await?)
        }
        ChartKind::WorldMap => world_map::nodes_on_map(&fetcher.country_stats(period).await?),
    };

    Ok(figure)
}

/// Build several charts as independent, concurrently-running pipelines.
///
/// Results come back per chart; one chart's failure leaves the others
/// untouched.
pub async fn build_figures<S: TextSource>(
    fetcher: &Fetcher<S>,
    kinds: &[ChartKind],
    period: &ReportingPeriod,
) -> Vec<(ChartKind, Result<Figure>)> {
    join_all(
        kinds
            .iter()
            .map(|&kind| async move { (kind, build_figure(fetcher, kind, period).await) }),
    )
    .await
}
