//! Positional CSV parsers, one per dataset shape.
//!
//! The snapshots carry no header row; column position is the only
//! addressing scheme, which makes the format brittle to reordering at the
//! exporter. Date columns abort the whole parse when unparseable. Numeric
//! columns coerce to NaN on bad input so a single damaged field degrades
//! aggregates instead of rejecting the dataset.

use crate::ingestor::{
    datasets::Dataset,
    error::ParseError,
    records::{
        ActiveNodeSample, ActiveNodeStat, CountryStat, DurationSample, EarningsByCountryRow,
        NodesByCountryRow, RatioSample, RetrievalSample, TrafficByCountryRow, TrafficSample,
    },
};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Numeric coercion: anything that is not a number becomes NaN, never an
/// error.
fn number(record: &StringRecord, index: usize) -> f64 {
    record
        .get(index)
        .map_or(f64::NAN, |raw| raw.trim().parse().unwrap_or(f64::NAN))
}

fn text(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

/// Date coercion: failure carries the raw value so the caller can attach
/// the row number.
fn date(record: &StringRecord, index: usize) -> Result<NaiveDate, (String, chrono::ParseError)> {
    let raw = record.get(index).unwrap_or_default();
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|source| (raw.to_string(), source))
}

/// Shared row driver: enforces the column count per row, preserves row
/// order, and turns a date failure into a dataset-level error with a
/// 1-based row number.
fn parse_rows<T, F>(
    dataset: Dataset,
    columns: usize,
    input: &str,
    mut build: F,
) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&StringRecord) -> Result<T, (String, chrono::ParseError)>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        if record.len() != columns {
            return Err(ParseError::ColumnCount {
                dataset,
                row,
                expected: columns,
                actual: record.len(),
            });
        }
        let value = build(&record).map_err(|(value, source)| ParseError::InvalidDate {
            dataset,
            row,
            value,
            source,
        })?;
        rows.push(value);
    }

    Ok(rows)
}

pub fn active_nodes(input: &str) -> Result<Vec<ActiveNodeSample>, ParseError> {
    parse_rows(Dataset::ActiveNodes, 10, input, |r| {
        Ok(ActiveNodeSample {
            date: date(r, 0)?,
            active_count: number(r, 1),
            active_2h_count: number(r, 2),
            active_not_serving_2h_count: number(r, 3),
            active_6h_count: number(r, 4),
            active_not_serving_6h_count: number(r, 5),
            active_12h_count: number(r, 6),
            active_not_serving_12h_count: number(r, 7),
            active_24h_count: number(r, 8),
            active_not_serving_24h_count: number(r, 9),
        })
    })
}

pub fn active_node_stats(input: &str) -> Result<Vec<ActiveNodeStat>, ParseError> {
    parse_rows(Dataset::ActiveNodeStats, 4, input, |r| {
        Ok(ActiveNodeStat {
            node_id: text(r, 0),
            age_days: number(r, 1),
            estimated_earnings_fil: number(r, 2),
            bandwidth_served_bytes: number(r, 3),
        })
    })
}

pub fn country_stats(input: &str) -> Result<Vec<CountryStat>, ParseError> {
    parse_rows(Dataset::CountryStats, 4, input, |r| {
        Ok(CountryStat {
            country: text(r, 0),
            active_node_count: number(r, 1),
            estimated_earnings_fil: number(r, 2),
            bandwidth_served_bytes: number(r, 3),
        })
    })
}

pub fn active_nodes_by_country(input: &str) -> Result<Vec<NodesByCountryRow>, ParseError> {
    parse_rows(Dataset::ActiveNodesByCountry, 3, input, |r| {
        Ok(NodesByCountryRow {
            date: date(r, 0)?,
            country: text(r, 1),
            active_node_count: number(r, 2),
        })
    })
}

pub fn traffic_by_country(input: &str) -> Result<Vec<TrafficByCountryRow>, ParseError> {
    parse_rows(Dataset::TrafficByCountry, 3, input, |r| {
        Ok(TrafficByCountryRow {
            date: date(r, 0)?,
            country: text(r, 1),
            traffic: number(r, 2),
        })
    })
}

pub fn earnings_by_country(input: &str) -> Result<Vec<EarningsByCountryRow>, ParseError> {
    parse_rows(Dataset::EarningsByCountry, 3, input, |r| {
        Ok(EarningsByCountryRow {
            date: date(r, 0)?,
            country: text(r, 1),
            earnings: number(r, 2),
        })
    })
}

pub fn traffic(input: &str) -> Result<Vec<TrafficSample>, ParseError> {
    parse_rows(Dataset::Traffic, 2, input, |r| {
        Ok(TrafficSample {
            date: date(r, 0)?,
            traffic: number(r, 1),
        })
    })
}

pub fn retrievals(input: &str) -> Result<Vec<RetrievalSample>, ParseError> {
    parse_rows(Dataset::Retrievals, 2, input, |r| {
        Ok(RetrievalSample {
            date: date(r, 0)?,
            retrievals: number(r, 1),
        })
    })
}

pub fn retrieval_durations(input: &str) -> Result<Vec<DurationSample>, ParseError> {
    parse_rows(Dataset::RetrievalDurations, 4, input, |r| {
        Ok(DurationSample {
            date: date(r, 0)?,
            p5_ms: number(r, 1),
            p50_ms: number(r, 2),
            p95_ms: number(r, 3),
        })
    })
}

pub fn traffic_ratio(input: &str) -> Result<Vec<RatioSample>, ParseError> {
    parse_rows(Dataset::TrafficRatio, 2, input, |r| {
        Ok(RatioSample {
            date: date(r, 0)?,
            ratio: number(r, 1),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_two_rows() {
        let samples = traffic("2023-10-01,100\n2023-10-02,150").unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(
            samples[0],
            TrafficSample {
                date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
                traffic: 100.0,
            }
        );
        assert_eq!(
            samples[1],
            TrafficSample {
                date: NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
                traffic: 150.0,
            }
        );
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let input = "2023-10-01,100,90,5,85,4,80,3,75,2\n2023-10-02,110,95,6,88,5,82,4,78,3";

        let first = active_nodes(input).unwrap();
        let second = active_nodes(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_order_preserved() {
        let samples = traffic("2023-10-03,3\n2023-10-01,1\n2023-10-02,2").unwrap();

        let dates: Vec<_> = samples.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, ["2023-10-03", "2023-10-01", "2023-10-02"]);
    }

    #[test]
    fn test_bad_number_degrades_to_nan() {
        let samples = traffic("2023-10-01,not-a-number").unwrap();

        assert_eq!(samples.len(), 1);
        assert!(samples[0].traffic.is_nan());
    }

    #[test]
    fn test_bad_date_fails_whole_parse() {
        let error = traffic("2023-10-01,100\nyesterday,150").unwrap_err();

        match error {
            ParseError::InvalidDate { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_column_count_fails_whole_parse() {
        let error = traffic("2023-10-01,100,extra").unwrap_err();

        match error {
            ParseError::ColumnCount {
                row,
                expected,
                actual,
                ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(traffic("").unwrap().is_empty());
        assert!(country_stats("").unwrap().is_empty());
    }

    #[test]
    fn test_country_stats_columns() {
        let stats = country_stats("Germany,120,34.5,9000000\nBrazil,80,12.25,4000000").unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].country, "Germany");
        assert_eq!(stats[0].active_node_count, 120.0);
        assert_eq!(stats[1].estimated_earnings_fil, 12.25);
    }

    #[test]
    fn test_retrieval_duration_percentiles() {
        let samples = retrieval_durations("2023-10-01,12.5,80,340").unwrap();

        assert_eq!(samples[0].p5_ms, 12.5);
        assert_eq!(samples[0].p50_ms, 80.0);
        assert_eq!(samples[0].p95_ms, 340.0);
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let samples = traffic("2023-10-01,100\n").unwrap();
        assert_eq!(samples.len(), 1);
    }
}
