use crate::{
    ingestor::records::ActiveNodeStat,
    processor::figure::{Axis, Figure, GridSpec, Layout, Legend, Trace},
};

/// Node age histogram. Only the raw ages are extracted here; binning
/// belongs to the renderer.
pub fn node_age_histogram(stats: &[ActiveNodeStat]) -> Figure {
    let ages: Vec<_> = stats.iter().map(|s| s.age_days).collect();

    let layout = Layout {
        xaxis: Some(Axis::fixed().title("Node age (days)")),
        yaxis: Some(Axis::fixed().title("Number of nodes")),
        hovermode: Some("x unified".to_string()),
        ..Layout::default()
    };

    Figure {
        traces: vec![Trace::histogram(ages)],
        layout,
    }
}

/// Earnings and traffic against node age, as two marker subplots stacked on
/// a shared age axis.
pub fn node_age_correlation(stats: &[ActiveNodeStat]) -> Figure {
    let ages: Vec<_> = stats.iter().map(|s| s.age_days).collect();
    let earnings: Vec<_> = stats.iter().map(|s| s.estimated_earnings_fil).collect();
    let bandwidth: Vec<_> = stats.iter().map(|s| s.bandwidth_served_bytes).collect();

    let traces = vec![
        Trace::scatter(ages.clone(), earnings).markers().name("Earnings"),
        Trace::scatter(ages, bandwidth)
            .markers()
            .y_axis("y2")
            .name("Traffic"),
    ];

    let layout = Layout {
        grid: Some(GridSpec { rows: 2, columns: 1 }),
        xaxis: Some(Axis::fixed().title("Node age (days)")),
        yaxis: Some(
            Axis::fixed()
                .title("Estimated earnings")
                .tickformat(".3~f")
                .ticksuffix(" FIL"),
        ),
        xaxis2: Some(Axis::fixed()),
        yaxis2: Some(
            Axis::fixed()
                .title("Traffic")
                .tickformat(".2~s")
                .ticksuffix("B"),
        ),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::figure::{AxisValues, TraceKind};

    fn stat(age: f64) -> ActiveNodeStat {
        ActiveNodeStat {
            node_id: "node".to_string(),
            age_days: age,
            estimated_earnings_fil: age * 0.1,
            bandwidth_served_bytes: age * 1.0e6,
        }
    }

    #[test]
    fn test_histogram_carries_raw_ages_only() {
        let figure = node_age_histogram(&[stat(3.0), stat(17.0), stat(3.0)]);

        assert_eq!(figure.traces.len(), 1);
        assert_eq!(figure.traces[0].kind, Some(TraceKind::Histogram));
        match figure.traces[0].x.as_ref().unwrap() {
            AxisValues::Numbers(values) => assert_eq!(values, &[3.0, 17.0, 3.0]),
            other => panic!("expected numbers, got {other:?}"),
        }
        assert!(figure.traces[0].y.is_none());
    }

    #[test]
    fn test_correlation_subplots() {
        let figure = node_age_correlation(&[stat(3.0), stat(17.0)]);

        assert_eq!(figure.traces.len(), 2);
        assert_eq!(figure.traces[0].mode.as_deref(), Some("markers"));
        assert_eq!(figure.traces[1].yaxis.as_deref(), Some("y2"));
        assert_eq!(
            figure.layout.grid,
            Some(GridSpec { rows: 2, columns: 1 })
        );
    }
}
