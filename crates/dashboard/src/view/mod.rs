//! Lazy per-placeholder rendering.
//!
//! The hosting page declares one placeholder per chart; the controller in
//! this module renders an empty scaffold for each, then runs the full
//! pipeline for a placeholder the first time it becomes sufficiently
//! visible. Visibility observation and drawing are both injected, so the
//! state machine runs the same against a browser bridge or a test double.

pub mod controller;

pub use controller::{LazyViewController, PlaceholderState};

use crate::{charts::ChartKind, processor::figure::Figure};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Chart placeholder as declared by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub target: String,
    pub chart: ChartKind,
}

impl PlaceholderSpec {
    pub fn new(target: impl Into<String>, chart: ChartKind) -> Self {
        Self {
            target: target.into(),
            chart,
        }
    }
}

/// One visibility observation for a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEvent {
    pub target: String,
    pub ratio: f64,
}

impl VisibilityEvent {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            ratio,
        }
    }
}

/// External drawing surface. The controller hands over a finished figure
/// and never depends on how it is drawn.
#[automock]
#[async_trait]
pub trait FigureRenderer: Send + Sync {
    async fn render(&self, target: &str, figure: &Figure) -> Result<()>;
}

/// Source of visibility observations. The embedder adapts whatever real
/// intersection machinery it has to this interface; tests script it.
#[automock]
#[async_trait]
pub trait VisibilitySource: Send {
    /// Next batch of observations, or `None` once observation ends.
    async fn next_batch(&mut self) -> Option<Vec<VisibilityEvent>>;
}
