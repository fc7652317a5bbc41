use crate::{
    ingestor::records::{DurationSample, RetrievalSample},
    processor::figure::{Axis, Figure, Layout, Legend, Trace},
};

/// Network retrieval count over time.
pub fn retrievals(samples: &[RetrievalSample]) -> Figure {
    let dates: Vec<_> = samples.iter().map(|s| s.date).collect();
    let counts: Vec<_> = samples.iter().map(|s| s.retrievals).collect();

    let layout = Layout {
        yaxis: Some(Axis::fixed().title("Number of retrievals")),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure {
        traces: vec![Trace::bar(dates, counts)],
        layout,
    }
}

/// Retrieval latency percentiles over time, one line per percentile.
pub fn retrieval_durations(samples: &[DurationSample]) -> Figure {
    let dates: Vec<_> = samples.iter().map(|s| s.date).collect();

    let percentiles: [(&str, fn(&DurationSample) -> f64); 3] = [
        ("p5", |s| s.p5_ms),
        ("p50", |s| s.p50_ms),
        ("p95", |s| s.p95_ms),
    ];

    let traces = percentiles
        .iter()
        .map(|(name, value)| {
            let values: Vec<_> = samples.iter().map(|s| value(s)).collect();
            Trace::scatter(dates.clone(), values).name(name)
        })
        .collect();

    let layout = Layout {
        yaxis: Some(
            Axis::fixed()
                .title("Retrieval duration")
                .ticksuffix(" ms"),
        ),
        xaxis: Some(Axis::fixed()),
        hovermode: Some("x unified".to_string()),
        legend: Some(Legend::horizontal()),
        ..Layout::default()
    };

    Figure { traces, layout }
}
