use crate::{
    ingestor::records::CountryStat,
    processor::figure::{Axis, Figure, Layout, Legend, Trace},
};
use std::cmp::Ordering;

/// Earnings per node, node count and traffic by country, ranked by
/// descending earnings per node.
///
/// Countries without active nodes are dropped before the division. The
/// ranked arrays are reversed before emission: the renderer draws
/// horizontal bars bottom-to-top, so reversal puts the top earners at the
/// top of the chart.
pub fn earnings_per_node(stats: &[CountryStat]) -> Figure {
    let mut ranked: Vec<_> = stats
        .iter()
        .filter(|s| s.active_node_count > 0.0)
        .map(|s| {
            (
                s.country.clone(),
                s.estimated_earnings_fil / s.active_node_count,
                s.active_node_count,
                s.bandwidth_served_bytes,
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut countries = Vec::with_capacity(ranked.len());
    let mut earnings = Vec::with_capacity(ranked.len());
    let mut node_counts = Vec::with_capacity(ranked.len());
    let mut traffic = Vec::with_capacity(ranked.len());
    for (country, per_node, count, bytes) in ranked {
        countries.push(country);
        earnings.push(per_node);
        node_counts.push(count);
        traffic.push(bytes);
    }

    countries.reverse();
    earnings.reverse();
    node_counts.reverse();
    traffic.reverse();

    let traces = vec![
        Trace::bar(earnings, countries.clone())
            .horizontal()
            .offset_group(1)
            .name("Earnings"),
        Trace::bar(node_counts, countries.clone())
            .horizontal()
            .x_axis("x2")
            .offset_group(2)
            .name("Nodes"),
        Trace::scatter(traffic, countries).x_axis("x3").name("Traffic"),
    ];

    let layout = Layout {
        xaxis: Some(
            Axis::fixed()
                .title("Estimated earnings per node")
                .side("top")
                .domain(0.0, 0.7)
                .tickformat(".3~f")
                .ticksuffix(" FIL"),
        ),
        xaxis2: Some(
            Axis::fixed()
                .title("Number of nodes")
                .overlaying("x")
                .side("bottom")
                .domain(0.0, 0.7),
        ),
        xaxis3: Some(
            Axis::fixed()
                .title("Total traffic")
                .side("top")
                .domain(0.7, 1.0)
                .tickformat(".2~s")
                .ticksuffix("B"),
        ),
        barmode: Some("group".to_string()),
        hovermode: Some("y unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::figure::AxisValues;

    fn stat(country: &str, nodes: f64, earnings: f64) -> CountryStat {
        CountryStat {
            country: country.to_string(),
            active_node_count: nodes,
            estimated_earnings_fil: earnings,
            bandwidth_served_bytes: 1.0e9,
        }
    }

    fn labels(figure: &Figure) -> Vec<String> {
        match figure.traces[0].y.as_ref().unwrap() {
            AxisValues::Labels(values) => values.clone(),
            other => panic!("expected labels, got {other:?}"),
        }
    }

    fn bar_values(figure: &Figure) -> Vec<f64> {
        match figure.traces[0].x.as_ref().unwrap() {
            AxisValues::Numbers(values) => values.clone(),
            other => panic!("expected numbers, got {other:?}"),
        }
    }

    #[test]
    fn test_ranked_then_reversed() {
        // A earns 5.0 per node, B earns 3.0: descending rank is [A, B] and
        // the reversed emission is [B, A].
        let stats = [stat("A", 2.0, 10.0), stat("B", 3.0, 9.0)];

        let figure = earnings_per_node(&stats);

        assert_eq!(labels(&figure), ["B", "A"]);
        assert_eq!(bar_values(&figure), [3.0, 5.0]);
    }

    #[test]
    fn test_zero_node_countries_are_dropped() {
        let stats = [stat("A", 2.0, 10.0), stat("Ghost", 0.0, 4.0)];

        let figure = earnings_per_node(&stats);

        assert_eq!(labels(&figure), ["A"]);
        assert!(bar_values(&figure).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_three_linked_series() {
        let stats = [stat("A", 2.0, 10.0), stat("B", 3.0, 9.0)];

        let figure = earnings_per_node(&stats);

        assert_eq!(figure.traces.len(), 3);
        assert_eq!(figure.traces[1].xaxis.as_deref(), Some("x2"));
        assert_eq!(figure.traces[2].xaxis.as_deref(), Some("x3"));
        assert_eq!(figure.layout.barmode.as_deref(), Some("group"));
    }
}
