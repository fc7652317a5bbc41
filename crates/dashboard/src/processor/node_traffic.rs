use crate::{
    ingestor::records::{ActiveNodeSample, TrafficSample},
    processor::figure::{Axis, Figure, Layout, Legend, Trace},
};

/// Active node count and network traffic over time on two independently
/// scaled axes. Each series keeps its own x array; no interpolation or
/// alignment happens here, the renderer aligns the shared date domain
/// visually.
pub fn active_nodes_and_traffic(nodes: &[ActiveNodeSample], traffic: &[TrafficSample]) -> Figure {
    let node_dates: Vec<_> = nodes.iter().map(|s| s.date).collect();
    let node_counts: Vec<_> = nodes.iter().map(|s| s.active_count).collect();

    let traffic_dates: Vec<_> = traffic.iter().map(|s| s.date).collect();
    let traffic_bytes: Vec<_> = traffic.iter().map(|s| s.traffic).collect();

    let traces = vec![
        Trace::scatter(node_dates, node_counts).name("Active nodes"),
        Trace::scatter(traffic_dates, traffic_bytes)
            .name("Traffic")
            .y_axis("y2"),
    ];

    let layout = Layout {
        yaxis: Some(Axis::fixed().title("Number of nodes")),
        yaxis2: Some(
            Axis::fixed()
                .title("Traffic")
                .overlaying("y")
                .side("right")
                .tickformat(".2~s")
                .ticksuffix("B"),
        ),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}
