use crate::{
    ingestor::records::{ActiveNodeSample, RatioSample},
    processor::{
        figure::{Axis, Figure, Layout, Legend, Trace},
        util::guarded_ratio,
    },
};

/// Paid-traffic ratio over time. Values are 0..=1 fractions; the percent
/// presentation comes from the axis tick format.
pub fn traffic_ratio(samples: &[RatioSample]) -> Figure {
    let dates: Vec<_> = samples.iter().map(|s| s.date).collect();
    let ratios: Vec<_> = samples.iter().map(|s| s.ratio).collect();

    let layout = Layout {
        yaxis: Some(Axis::fixed().title("Traffic ratio").tickformat(".0%")),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure {
        traces: vec![Trace::scatter(dates, ratios)],
        layout,
    }
}

/// Share of active nodes that served no traffic, one series per activity
/// window. A window with zero active nodes contributes a 0 ratio for that
/// sample, one output point per input sample either way.
pub fn nodes_without_traffic(samples: &[ActiveNodeSample]) -> Figure {
    let dates: Vec<_> = samples.iter().map(|s| s.date).collect();

    let windows: [(&str, fn(&ActiveNodeSample) -> f64, fn(&ActiveNodeSample) -> f64); 4] = [
        (
            "2 hours",
            |s| s.active_not_serving_2h_count,
            |s| s.active_2h_count,
        ),
        (
            "6 hours",
            |s| s.active_not_serving_6h_count,
            |s| s.active_6h_count,
        ),
        (
            "12 hours",
            |s| s.active_not_serving_12h_count,
            |s| s.active_12h_count,
        ),
        (
            "1 day",
            |s| s.active_not_serving_24h_count,
            |s| s.active_24h_count,
        ),
    ];

    let traces = windows
        .iter()
        .map(|(name, not_serving, active)| {
            let ratios: Vec<_> = samples
                .iter()
                .map(|s| guarded_ratio(not_serving(s), active(s)))
                .collect();
            Trace::scatter(dates.clone(), ratios).name(name)
        })
        .collect();

    let layout = Layout {
        yaxis: Some(Axis::fixed().title("Percent of nodes").tickformat(".0%")),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}
