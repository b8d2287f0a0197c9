use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Rect};
use crate::interaction::PointerState;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub container: Rect,
    pub plot_area: PlotArea,
    pub samples_len: usize,
    pub pointer: Option<PointerState>,
}

/// Change notifications emitted by the chart.
///
/// Only state changes are reported; a move to the same pointer position or a
/// second leave emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SamplesUpdated { samples_len: usize },
    LayoutChanged { width: f64, height: f64 },
    PointerChanged { state: PointerState },
    PointerLeft,
    TooltipPlaced { left: f64, top: f64 },
    Rendered,
}

/// Redraw hook for presentation layers.
///
/// Observers can read chart context but cannot mutate chart internals.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ChartContext);
}
