use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting period selecting which monthly snapshot directory to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub year: i32,
    pub month: u32,
}

impl ReportingPeriod {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self {
            year: 2023,
            month: 10,
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year={}/month={:02}", self.year, self.month)
    }
}

/// One dataset snapshot published for each reporting period.
///
/// The file set is fixed per deployment; every variant maps to exactly one
/// object key and one record parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    ActiveNodes,
    ActiveNodeStats,
    CountryStats,
    ActiveNodesByCountry,
    TrafficByCountry,
    EarningsByCountry,
    Traffic,
    Retrievals,
    RetrievalDurations,
    TrafficRatio,
}

impl Dataset {
    pub const fn all() -> [Self; 10] {
        [
            Self::ActiveNodes,
            Self::ActiveNodeStats,
            Self::CountryStats,
            Self::ActiveNodesByCountry,
            Self::TrafficByCountry,
            Self::EarningsByCountry,
            Self::Traffic,
            Self::Retrievals,
            Self::RetrievalDurations,
            Self::TrafficRatio,
        ]
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::ActiveNodes => "active-nodes",
            Self::ActiveNodeStats => "active-node-stats",
            Self::CountryStats => "country-stats",
            Self::ActiveNodesByCountry => "active-nodes-by-country",
            Self::TrafficByCountry => "traffic-by-country",
            Self::EarningsByCountry => "earnings-by-country",
            Self::Traffic => "traffic",
            Self::Retrievals => "retrievals",
            Self::RetrievalDurations => "retrieval-durations",
            Self::TrafficRatio => "traffic-ratio",
        }
    }

    /// File name of the snapshot inside a reporting-period directory.
    pub const fn object_key(&self) -> &'static str {
        match self {
            Self::ActiveNodes => "saturn_active_node.csv",
            Self::ActiveNodeStats => "saturn_active_node_stats.csv",
            Self::CountryStats => "saturn_country_stats.csv",
            Self::ActiveNodesByCountry => "saturn_active_node_by_country.csv",
            Self::TrafficByCountry => "saturn_traffic_by_country.csv",
            Self::EarningsByCountry => "saturn_earnings_by_country.csv",
            Self::Traffic => "saturn_traffic.csv",
            Self::Retrievals => "saturn_retrievals.csv",
            Self::RetrievalDurations => "saturn_retrieval_duration.csv",
            Self::TrafficRatio => "saturn_traffic_ratio.csv",
        }
    }

    /// Full locator of the snapshot: `<base>/year=<YYYY>/month=<MM>/<file>`.
    pub fn locator(&self, base_url: &str, period: &ReportingPeriod) -> String {
        format!(
            "{}/{period}/{}",
            base_url.trim_end_matches('/'),
            self.object_key()
        )
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_layout() {
        let period = ReportingPeriod::new(2023, 10);
        assert_eq!(
            Dataset::ActiveNodes.locator("https://gateway.example/snapshots", &period),
            "https://gateway.example/snapshots/year=2023/month=10/saturn_active_node.csv"
        );
    }

    #[test]
    fn test_locator_strips_trailing_slash() {
        let period = ReportingPeriod::new(2024, 3);
        assert_eq!(
            Dataset::Traffic.locator("https://gateway.example/snapshots/", &period),
            "https://gateway.example/snapshots/year=2024/month=03/saturn_traffic.csv"
        );
    }

    #[test]
    fn test_default_period() {
        let period = ReportingPeriod::default();
        assert_eq!(period.year, 2023);
        assert_eq!(period.month, 10);
    }

    #[test]
    fn test_object_keys_are_unique() {
        let keys: std::collections::HashSet<_> =
            Dataset::all().iter().map(|d| d.object_key()).collect();
        assert_eq!(keys.len(), Dataset::all().len());
    }
}
