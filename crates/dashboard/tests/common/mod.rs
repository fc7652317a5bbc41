use async_trait::async_trait;
use saturn_dashboard::ingestor::{
    datasets::{Dataset, ReportingPeriod},
    error::FetchError,
    source::TextSource,
};
use std::collections::HashMap;

pub const PERIOD: ReportingPeriod = ReportingPeriod::new(2023, 10);

pub const ACTIVE_NODES: &str = "\
2023-10-01,2000,1900,190,1800,90,1700,85,1600,80
2023-10-02,2100,2000,100,1900,95,1800,90,1700,85
2023-10-03,2200,0,0,2000,100,1900,95,1800,90";

pub const ACTIVE_NODE_STATS: &str = "\
node-aa,120,4.5,9000000000
node-bb,30,1.5,3000000000
node-cc,365,9.0,27000000000";

pub const COUNTRY_STATS: &str = "\
Portugal,10,5.0,1000000000
Germany,120,30.0,9000000000
Brazil,40,8.0,2000000000";

pub const NODES_BY_COUNTRY: &str = "\
2023-10-01,Portugal,10
2023-10-01,Germany,120
2023-10-02,Portugal,11
2023-10-02,Germany,118";

pub const TRAFFIC_BY_COUNTRY: &str = "\
2023-10-01,Portugal,100000000
2023-10-01,Germany,900000000";

pub const EARNINGS_BY_COUNTRY: &str = "\
2023-10-01,Portugal,0.5
2023-10-01,Germany,3.25";

pub const TRAFFIC: &str = "\
2023-10-01,5000000000000
2023-10-02,5250000000000";

pub const RETRIEVALS: &str = "\
2023-10-01,120000
2023-10-02,135000";

pub const RETRIEVAL_DURATIONS: &str = "\
2023-10-01,12.5,80,340
2023-10-02,11.0,75,330";

pub const TRAFFIC_RATIO: &str = "\
2023-10-01,0.42
2023-10-02,0.45";

/// In-memory snapshot store standing in for the object-store gateway.
pub struct StaticSource {
    snapshots: HashMap<Dataset, String>,
}

impl StaticSource {
    pub fn with_fixtures() -> Self {
        let mut source = Self::empty();
        source.insert(Dataset::ActiveNodes, ACTIVE_NODES);
        source.insert(Dataset::ActiveNodeStats, ACTIVE_NODE_STATS);
        source.insert(Dataset::CountryStats, COUNTRY_STATS);
        source.insert(Dataset::ActiveNodesByCountry, NODES_BY_COUNTRY);
        source.insert(Dataset::TrafficByCountry, TRAFFIC_BY_COUNTRY);
        source.insert(Dataset::EarningsByCountry, EARNINGS_BY_COUNTRY);
        source.insert(Dataset::Traffic, TRAFFIC);
        source.insert(Dataset::Retrievals, RETRIEVALS);
        source.insert(Dataset::RetrievalDurations, RETRIEVAL_DURATIONS);
        source.insert(Dataset::TrafficRatio, TRAFFIC_RATIO);
        source
    }

    pub fn empty() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    pub fn insert(&mut self, dataset: Dataset, text: &str) {
        self.snapshots.insert(dataset, text.to_string());
    }
}

#[async_trait]
impl TextSource for StaticSource {
    async fn fetch_text(
        &self,
        dataset: Dataset,
        _period: &ReportingPeriod,
    ) -> Result<String, FetchError> {
        self.snapshots
            .get(&dataset)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: dataset.object_key().to_string(),
            })
    }
}
