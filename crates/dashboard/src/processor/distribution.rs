use crate::{
    ingestor::records::ActiveNodeStat,
    processor::{
        figure::{Axis, Figure, Layout, Legend, Trace},
        util::{guarded_ratio, sorted_desc},
    },
};

/// Cumulative share of a metric against the fraction of entities processed,
/// largest contributors first.
///
/// Output sequences have the input's length; y is monotonically
/// non-decreasing and ends at 1.0 whenever the total is positive. A zero
/// total yields all-zero shares.
pub fn concentration_curve(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let sorted = sorted_desc(values);
    let total: f64 = sorted.iter().sum();
    let count = sorted.len();

    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);
    let mut running = 0.0;
    for (index, value) in sorted.iter().enumerate() {
        x.push(index as f64 / count as f64);
        running += value;
        y.push(guarded_ratio(running, total));
    }

    (x, y)
}

/// Earnings and traffic concentration across nodes: the top x fraction of
/// nodes accounts for the y fraction of the metric.
pub fn node_distribution(stats: &[ActiveNodeStat]) -> Figure {
    let earnings: Vec<_> = stats.iter().map(|s| s.estimated_earnings_fil).collect();
    let bandwidth: Vec<_> = stats.iter().map(|s| s.bandwidth_served_bytes).collect();

    let (earnings_x, earnings_y) = concentration_curve(&earnings);
    let (bandwidth_x, bandwidth_y) = concentration_curve(&bandwidth);

    let traces = vec![
        Trace::scatter(earnings_x, earnings_y).name("Earnings"),
        Trace::scatter(bandwidth_x, bandwidth_y).name("Traffic"),
    ];

    let layout = Layout {
        xaxis: Some(
            Axis::fixed()
                .title("Percent of nodes")
                .tickformat(".2~%")
                .log(),
        ),
        yaxis: Some(Axis::fixed().tickformat(".0%").log()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}
