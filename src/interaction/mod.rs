mod pointer;
mod tooltip;

pub use pointer::{
    MAX_GRADIENT_INDEX, PointerHit, PointerState, gradient_index, nearest_sample_index,
    track_pointer,
};
pub use tooltip::{TooltipAnchor, TooltipAnchorPass, TooltipLayout, TooltipSize, tooltip_anchor};

use serde::{Deserialize, Serialize};

/// Indicator dot plus vertical guide line under the pointer.
///
/// Coordinates are container-local. The dot sits just below the pointer tip
/// and the guide line runs from the dot's bottom edge to the bottom margin line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairGeometry {
    pub dot_x: f64,
    pub dot_y: f64,
    pub dot_radius: f64,
    pub line_x: f64,
    pub line_top: f64,
    pub line_bottom: f64,
    pub gradient_index: u8,
}

impl CrosshairGeometry {
    #[must_use]
    pub fn from_pointer(
        pointer: PointerState,
        dot_radius: f64,
        container_height: f64,
        margin_bottom: f64,
    ) -> Self {
        Self {
            dot_x: pointer.local_x,
            dot_y: pointer.local_y + dot_radius,
            dot_radius,
            line_x: pointer.local_x,
            line_top: pointer.local_y + dot_radius * 2.0,
            line_bottom: container_height - margin_bottom - 1.0,
            gradient_index: pointer.gradient_index,
        }
    }

    /// Guide line has positive length (pointer above the bottom margin line).
    #[must_use]
    pub fn has_guide_line(self) -> bool {
        self.line_bottom > self.line_top
    }
}

/// Interaction state owned by the chart.
///
/// Holds the single current pointer state; every update replaces it
/// wholesale so the newest event always wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pointer: Option<PointerState>,
    tooltip: TooltipLayout,
}

impl InteractionState {
    #[must_use]
    pub fn pointer(&self) -> Option<PointerState> {
        self.pointer
    }

    #[must_use]
    pub fn tooltip_layout(&self) -> &TooltipLayout {
        &self.tooltip
    }

    pub fn tooltip_layout_mut(&mut self) -> &mut TooltipLayout {
        &mut self.tooltip
    }

    /// Stores the new pointer state. Returns `true` when the state value changed.
    pub fn on_pointer_move(&mut self, state: PointerState) -> bool {
        self.pointer.replace(state) != Some(state)
    }

    /// Clears pointer and tooltip measurement. Returns `true` when a pointer was present.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.tooltip.invalidate();
        self.pointer.take().is_some()
    }
}
