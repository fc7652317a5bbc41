use crate::{
    ingestor::records::{EarningsByCountryRow, NodesByCountryRow, TrafficByCountryRow},
    processor::figure::{Axis, Figure, Layout, Legend, MenuButton, Trace, UpdateMenu},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct CountrySeries {
    nodes: (Vec<NaiveDate>, Vec<f64>),
    traffic: (Vec<NaiveDate>, Vec<f64>),
    earnings: (Vec<NaiveDate>, Vec<f64>),
}

/// One boolean per trace; exactly the selected country's three-trace block
/// is on.
pub fn visibility_mask(countries: usize, selected: usize) -> Vec<bool> {
    let mut mask = vec![false; countries * 3];
    for flag in mask.iter_mut().skip(selected * 3).take(3) {
        *flag = true;
    }
    mask
}

/// Per-country node count, traffic and earnings over time.
///
/// The three flat per-date-per-country sequences are grouped by country
/// name and emitted in lexicographic order, so selector buttons and trace
/// indices are deterministic for any input row order. The selector shows
/// one country's three traces at a time; the first country is visible by
/// default.
pub fn active_nodes_by_country(
    nodes: &[NodesByCountryRow],
    traffic: &[TrafficByCountryRow],
    earnings: &[EarningsByCountryRow],
) -> Figure {
    let mut countries: BTreeMap<&str, CountrySeries> = BTreeMap::new();

    for row in nodes {
        let series = countries.entry(row.country.as_str()).or_default();
        series.nodes.0.push(row.date);
        series.nodes.1.push(row.active_node_count);
    }
    for row in traffic {
        let series = countries.entry(row.country.as_str()).or_default();
        series.traffic.0.push(row.date);
        series.traffic.1.push(row.traffic);
    }
    for row in earnings {
        let series = countries.entry(row.country.as_str()).or_default();
        series.earnings.0.push(row.date);
        series.earnings.1.push(row.earnings);
    }

    let count = countries.len();
    let mut traces = Vec::with_capacity(count * 3);
    let mut menu = UpdateMenu::top_left();

    for (index, (country, series)) in countries.into_iter().enumerate() {
        let visible = index == 0;

        traces.push(
            Trace::scatter(series.earnings.0, series.earnings.1)
                .name("Earnings")
                .x_axis("x1")
                .y_axis("y3")
                .visible(visible),
        );
        traces.push(
            Trace::scatter(series.nodes.0, series.nodes.1)
                .name("Nodes")
                .x_axis("x1")
                .y_axis("y1")
                .visible(visible),
        );
        traces.push(
            Trace::scatter(series.traffic.0, series.traffic.1)
                .name("Traffic")
                .x_axis("x1")
                .y_axis("y2")
                .visible(visible),
        );

        menu.buttons
            .push(MenuButton::restyle_visible(country, visibility_mask(count, index)));
    }

    let layout = Layout {
        yaxis3: Some(
            Axis::fixed()
                .title("Estimated earnings")
                .side("left")
                .domain(0.0, 0.5)
                .tickformat(".3~f")
                .ticksuffix(" FIL"),
        ),
        yaxis2: Some(
            Axis::fixed()
                .title("Traffic")
                .overlaying("y")
                .side("right")
                .domain(0.0, 0.5)
                .tickformat(".2~s")
                .ticksuffix("B"),
        ),
        yaxis: Some(
            Axis::fixed()
                .title("Number of nodes")
                .side("left")
                .domain(0.5, 1.0),
        ),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        updatemenus: vec![menu],
        ..Layout::default()
    };

    Figure { traces, layout }
}
