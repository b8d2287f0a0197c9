use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, Rect, Sample, ScrollOffset};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairGeometry, PointerState, TooltipAnchor};
use crate::render::Renderer;

use super::{AxisTick, Chart};

/// Serializable view of derived chart state used by hosts, regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub container: Rect,
    pub scroll: ScrollOffset,
    pub plot_area: PlotArea,
    pub x_scale: Option<LinearScale>,
    pub y_scale: Option<LinearScale>,
    pub samples: Vec<Sample>,
    /// SVG path data of the rendered line.
    pub stroke_path: String,
    pub fill_path: String,
    pub hit_region_path: String,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub pointer: Option<PointerState>,
    pub tooltip_label: Option<String>,
    pub tooltip_anchor: Option<TooltipAnchor>,
    pub crosshair: Option<CrosshairGeometry>,
    /// Hex color of the crosshair stroke.
    pub crosshair_color: Option<String>,
}

impl<R: Renderer> Chart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            container: self.container,
            scroll: self.scroll,
            plot_area: self.geometry.plot_area,
            x_scale: self.geometry.x_scale,
            y_scale: self.geometry.y_scale,
            samples: self.samples.clone(),
            stroke_path: self.geometry.stroke.to_svg_path_data(),
            fill_path: self.geometry.fill.to_svg_path_data(),
            hit_region_path: self.geometry.hit_region.to_svg_path_data(),
            x_ticks: self.x_ticks(),
            y_ticks: self.y_ticks(),
            pointer: self.interaction.pointer(),
            tooltip_label: self.tooltip_label(),
            tooltip_anchor: self.tooltip_anchor(),
            crosshair: self.crosshair(),
            crosshair_color: self.crosshair_color().map(|color| color.to_hex()),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
