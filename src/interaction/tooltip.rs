use serde::{Deserialize, Serialize};

use crate::core::ScrollOffset;

/// Measured size of the rendered tooltip box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl TooltipSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Layout pass an anchor was computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipAnchorPass {
    /// No fresh measurement for the current content; the box may still move.
    Provisional,
    /// Computed from a measurement of the current content.
    Final,
}

/// Page-space top-left corner of the tooltip box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
    pub pass: TooltipAnchorPass,
}

/// Centers the box horizontally on the pointer with its bottom edge on the pointer.
#[must_use]
pub fn tooltip_anchor(
    screen_x: f64,
    screen_y: f64,
    scroll: ScrollOffset,
    size: TooltipSize,
    pass: TooltipAnchorPass,
) -> TooltipAnchor {
    TooltipAnchor {
        left: screen_x + scroll.x - size.width / 2.0,
        top: screen_y + scroll.y - size.height,
        pass,
    }
}

/// Two-pass tooltip measurement state.
///
/// Pass one places the tooltip with whatever size is known (zero before the
/// first measurement). The presentation layer then measures the laid-out box
/// and reports it through [`TooltipLayout::record_measurement`]; pass two
/// recomputes a final anchor. A measurement only counts as fresh for the
/// label it was taken with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipLayout {
    measured: Option<(String, TooltipSize)>,
}

impl TooltipLayout {
    pub fn record_measurement(&mut self, label: impl Into<String>, size: TooltipSize) {
        self.measured = Some((label.into(), size));
    }

    /// Drops the measurement; the next anchor is provisional until re-measured.
    pub fn invalidate(&mut self) {
        self.measured = None;
    }

    #[must_use]
    pub fn measured_size(&self) -> Option<TooltipSize> {
        self.measured.as_ref().map(|(_, size)| *size)
    }

    #[must_use]
    pub fn is_fresh_for(&self, label: &str) -> bool {
        self.measured
            .as_ref()
            .is_some_and(|(measured_label, _)| measured_label == label)
    }

    #[must_use]
    pub fn anchor(
        &self,
        screen_x: f64,
        screen_y: f64,
        scroll: ScrollOffset,
        label: &str,
    ) -> TooltipAnchor {
        let pass = if self.is_fresh_for(label) {
            TooltipAnchorPass::Final
        } else {
            TooltipAnchorPass::Provisional
        };
        let size = self
            .measured_size()
            .unwrap_or(TooltipSize::new(0.0, 0.0));
        tooltip_anchor(screen_x, screen_y, scroll, size, pass)
    }
}
