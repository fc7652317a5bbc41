//! Typed rows for every dataset shape. Records are immutable once parsed;
//! each pipeline run builds fresh sequences and discards them after render.
//!
//! Numeric fields are `f64` throughout: a field that fails numeric coercion
//! becomes NaN and degrades downstream aggregates instead of aborting the
//! dataset.

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;

/// Daily network-wide node counts, including per activity window (2h, 6h,
/// 12h, 24h) how many active nodes served no traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ActiveNodeSample {
    pub date: NaiveDate,
    pub active_count: f64,
    pub active_2h_count: f64,
    pub active_not_serving_2h_count: f64,
    pub active_6h_count: f64,
    pub active_not_serving_6h_count: f64,
    pub active_12h_count: f64,
    pub active_not_serving_12h_count: f64,
    pub active_24h_count: f64,
    pub active_not_serving_24h_count: f64,
}

/// Per-node snapshot at report time.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct ActiveNodeStat {
    pub node_id: String,
    pub age_days: f64,
    pub estimated_earnings_fil: f64,
    pub bandwidth_served_bytes: f64,
}

/// Per-country totals for the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct CountryStat {
    pub country: String,
    pub active_node_count: f64,
    pub estimated_earnings_fil: f64,
    pub bandwidth_served_bytes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct NodesByCountryRow {
    pub date: NaiveDate,
    pub country: String,
    pub active_node_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TrafficByCountryRow {
    pub date: NaiveDate,
    pub country: String,
    pub traffic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct EarningsByCountryRow {
    pub date: NaiveDate,
    pub country: String,
    pub earnings: f64,
}

/// Daily bytes served network-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TrafficSample {
    pub date: NaiveDate,
    pub traffic: f64,
}

/// Daily retrieval count network-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct RetrievalSample {
    pub date: NaiveDate,
    pub retrievals: f64,
}

/// Daily retrieval latency percentiles.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct DurationSample {
    pub date: NaiveDate,
    pub p5_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
}

/// Daily paid-traffic ratio as a 0..=1 fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct RatioSample {
    pub date: NaiveDate,
    pub ratio: f64,
}
