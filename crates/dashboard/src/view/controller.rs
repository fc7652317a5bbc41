use crate::{
    charts::{self, ChartKind},
    ingestor::{datasets::ReportingPeriod, fetcher::Fetcher, source::TextSource},
    settings::Settings,
    view::{FigureRenderer, PlaceholderSpec, VisibilityEvent, VisibilitySource},
};
use anyhow::Result;
use futures::future::join_all;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, warn};

/// Lifecycle of one chart placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderState {
    /// Scaffold rendered, waiting to become visible.
    Pending,
    /// Pipeline triggered; further visibility events are no-ops.
    Loaded,
}

struct Placeholder {
    chart: ChartKind,
    state: PlaceholderState,
}

/// Runs each placeholder's fetch → parse → transform → render pipeline
/// exactly once, the first time the placeholder's intersection ratio
/// reaches the configured threshold.
pub struct LazyViewController<S, R> {
    fetcher: Fetcher<S>,
    renderer: Arc<R>,
    period: ReportingPeriod,
    threshold: f64,
    placeholders: HashMap<String, Placeholder>,
}

impl<S, R> LazyViewController<S, R>
where
    S: TextSource,
    R: FigureRenderer,
{
    pub fn new(
        fetcher: Fetcher<S>,
        renderer: Arc<R>,
        period: ReportingPeriod,
        threshold: f64,
    ) -> Self {
        Self {
            fetcher,
            renderer,
            period,
            threshold,
            placeholders: HashMap::new(),
        }
    }

    pub fn from_settings(fetcher: Fetcher<S>, renderer: Arc<R>, settings: &Settings) -> Self {
        Self::new(
            fetcher,
            renderer,
            settings.reporting_period(),
            settings.view.visibility_threshold,
        )
    }

    /// Register a placeholder and draw its empty scaffold.
    pub async fn register(&mut self, spec: PlaceholderSpec) -> Result<()> {
        let scaffold = spec.chart.empty_figure();
        self.renderer.render(&spec.target, &scaffold).await?;
        self.placeholders.insert(
            spec.target,
            Placeholder {
                chart: spec.chart,
                state: PlaceholderState::Pending,
            },
        );
        Ok(())
    }

    pub fn state(&self, target: &str) -> Option<PlaceholderState> {
        self.placeholders.get(target).map(|p| p.state)
    }

    /// Handle one batch of visibility observations.
    ///
    /// Placeholders crossing the threshold for the first time get their
    /// pipeline; pipelines for distinct placeholders run concurrently and
    /// share no mutable state. The Pending → Loaded transition happens
    /// before any fetch starts, so a duplicate event in this or any later
    /// batch cannot trigger a second pipeline. A failed pipeline is logged
    /// and contained: the placeholder keeps its scaffold and is not
    /// retried, other charts are unaffected.
    pub async fn handle_batch(&mut self, events: &[VisibilityEvent]) {
        let mut triggered = Vec::new();
        for event in events {
            if event.ratio < self.threshold {
                continue;
            }
            let Some(placeholder) = self.placeholders.get_mut(&event.target) else {
                debug!(target = %event.target, "Visibility event for unknown placeholder");
                continue;
            };
            if placeholder.state == PlaceholderState::Loaded {
                continue;
            }
            placeholder.state = PlaceholderState::Loaded;
            triggered.push((event.target.clone(), placeholder.chart));
        }

        let pipelines = triggered.into_iter().map(|(target, chart)| {
            let fetcher = self.fetcher.clone();
            let renderer = Arc::clone(&self.renderer);
            let period = self.period;
            async move {
                match charts::build_figure(&fetcher, chart, &period).await {
                    Ok(figure) => match renderer.render(&target, &figure).await {
                        Ok(()) => info!(%target, %chart, "Chart loaded"),
                        Err(error) => {
                            warn!(%target, %chart, "Renderer failed: {error:#}");
                        }
                    },
                    Err(error) => {
                        warn!(%target, %chart, "Chart pipeline failed: {error:#}");
                    }
                }
            }
        });
        join_all(pipelines).await;
    }

    /// Drain batches from a visibility source until it ends.
    pub async fn run<V: VisibilitySource>(&mut self, source: &mut V) {
        while let Some(batch) = source.next_batch().await {
            self.handle_batch(&batch).await;
        }
    }
}
