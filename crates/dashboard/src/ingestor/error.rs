use crate::ingestor::datasets::Dataset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{dataset} row {row}: expected {expected} columns, got {actual}")]
    ColumnCount {
        dataset: Dataset,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{dataset} row {row}: invalid date {value:?}: {source}")]
    InvalidDate {
        dataset: Dataset,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
