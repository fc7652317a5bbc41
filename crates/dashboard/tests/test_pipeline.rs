mod common;

use common::{PERIOD, StaticSource};
use saturn_dashboard::{
    charts::{ChartKind, build_figure, build_figures},
    ingestor::{datasets::Dataset, fetcher::Fetcher, source::MockTextSource},
    processor::figure::AxisValues,
};
use std::sync::Arc;

fn fixture_fetcher() -> Fetcher<StaticSource> {
    Fetcher::new(Arc::new(StaticSource::with_fixtures()))
}

#[tokio::test]
async fn every_chart_builds_from_fixtures() {
    let fetcher = fixture_fetcher();

    for kind in ChartKind::all() {
        let figure = build_figure(&fetcher, kind, &PERIOD)
            .await
            .unwrap_or_else(|e| panic!("{kind} failed: {e:#}"));
        assert!(!figure.traces.is_empty(), "{kind} produced no traces");
    }
}

#[tokio::test]
async fn country_selector_is_sorted_regardless_of_input_order() {
    let fetcher = fixture_fetcher();

    let figure = build_figure(&fetcher, ChartKind::NodesByCountry, &PERIOD)
        .await
        .unwrap();

    let labels: Vec<_> = figure.layout.updatemenus[0]
        .buttons
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, ["Germany", "Portugal"]);

    // Germany sorts first, so its three traces are the visible block.
    let visible: Vec<_> = figure.traces.iter().map(|t| t.visible.unwrap()).collect();
    assert_eq!(visible, [true, true, true, false, false, false]);
}

#[tokio::test]
async fn ranking_orders_countries_by_earnings_per_node() {
    let fetcher = fixture_fetcher();

    let figure = build_figure(&fetcher, ChartKind::CountryRanking, &PERIOD)
        .await
        .unwrap();

    // Per-node earnings: Portugal 0.5, Germany 0.25, Brazil 0.2. Descending
    // rank reversed for bottom-to-top bars.
    match figure.traces[0].y.as_ref().unwrap() {
        AxisValues::Labels(countries) => {
            assert_eq!(countries, &["Brazil", "Germany", "Portugal"]);
        }
        other => panic!("expected labels, got {other:?}"),
    }
}

#[tokio::test]
async fn windowed_ratio_survives_zero_counts() {
    let fetcher = fixture_fetcher();

    let figure = build_figure(&fetcher, ChartKind::NodesWithoutTraffic, &PERIOD)
        .await
        .unwrap();

    // The third fixture day reports a zero 2h window.
    match figure.traces[0].y.as_ref().unwrap() {
        AxisValues::Numbers(ratios) => {
            assert_eq!(ratios.len(), 3);
            assert!((ratios[0] - 0.1).abs() < 1e-9);
            assert_eq!(ratios[2], 0.0);
            assert!(ratios.iter().all(|r| r.is_finite()));
        }
        other => panic!("expected numbers, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_date_rejects_only_the_charts_that_need_it() {
    let mut source = StaticSource::with_fixtures();
    source.insert(Dataset::Traffic, "2023-10-01,100\nyesterday,150");
    let fetcher = Fetcher::new(Arc::new(source));

    let err = build_figure(&fetcher, ChartKind::ActiveNodesAndTraffic, &PERIOD)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid date"));

    // Charts that do not touch the damaged dataset still build.
    build_figure(&fetcher, ChartKind::Retrievals, &PERIOD)
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_dataset_rejects_the_pipeline() {
    let fetcher = Fetcher::new(Arc::new(StaticSource::empty()));

    let err = build_figure(&fetcher, ChartKind::TrafficRatio, &PERIOD)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("traffic-ratio"));
}

#[tokio::test]
async fn each_dataset_is_fetched_once_per_build() {
    let mut source = MockTextSource::new();
    source
        .expect_fetch_text()
        .withf(|dataset, _| *dataset == Dataset::Retrievals)
        .times(1)
        .returning(|_, _| Ok(common::RETRIEVALS.to_string()));

    let fetcher = Fetcher::new(Arc::new(source));
    build_figure(&fetcher, ChartKind::Retrievals, &PERIOD)
        .await
        .unwrap();
}

#[tokio::test]
async fn batch_build_isolates_failures_per_chart() {
    let mut source = StaticSource::with_fixtures();
    source.insert(Dataset::Retrievals, "not-a-date,100");
    let fetcher = Fetcher::new(Arc::new(source));

    let kinds = [ChartKind::Retrievals, ChartKind::TrafficRatio];
    let results = build_figures(&fetcher, &kinds, &PERIOD).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].1.is_err());
    assert!(results[1].1.is_ok());
}

#[tokio::test]
async fn figure_json_matches_renderer_contract() {
    let fetcher = fixture_fetcher();

    let figure = build_figure(&fetcher, ChartKind::ActiveNodesAndTraffic, &PERIOD)
        .await
        .unwrap();
    let json = serde_json::to_value(&figure).unwrap();

    assert_eq!(json["traces"][0]["x"][0], "2023-10-01");
    assert_eq!(json["traces"][1]["yaxis"], "y2");
    assert_eq!(json["layout"]["yaxis2"]["overlaying"], "y");
    assert_eq!(json["layout"]["hovermode"], "x unified");
}
