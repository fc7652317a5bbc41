//! Chart-data backend for the Saturn network historical-metrics dashboard.
//!
//! The pipeline is fixed: the dataset registry resolves period-partitioned
//! CSV snapshots on an object-store gateway, record parsers turn raw text
//! into typed rows, series transformers reshape those rows into
//! renderer-ready figures, and a lazy view controller runs one
//! fetch → parse → transform → render pipeline per chart placeholder the
//! first time it becomes visible.

pub mod charts;
pub mod ingestor;
pub mod processor;
pub mod settings;
pub mod view;
