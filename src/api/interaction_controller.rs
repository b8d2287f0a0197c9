use tracing::trace;

use crate::core::RgbColor;
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::interaction::{
    CrosshairGeometry, PointerState, TooltipAnchor, TooltipSize, track_pointer,
};
use crate::render::Renderer;

use super::observer_dispatch::EventBuffer;
#[cfg(feature = "cairo-backend")]
use super::render_frame_builder::tooltip_box_size;
use super::Chart;

impl<R: Renderer> Chart<R> {
    /// Tracks a pointer at screen (client) coordinates.
    ///
    /// A pointer outside the hit region, or one that cannot be mapped onto the
    /// series, is handled as a leave. Returns the resulting pointer state.
    pub fn pointer_move(&mut self, screen_x: f64, screen_y: f64) -> Option<PointerState> {
        let next = self.track_screen_pointer(screen_x, screen_y);
        trace!(
            screen_x,
            screen_y,
            nearest_index = next.map(|state| state.nearest_index),
            gradient_index = next.map(|state| state.gradient_index),
            "pointer move"
        );

        let mut events = EventBuffer::new();
        self.apply_pointer(next, &mut events);
        self.emit_events(events);
        next
    }

    /// Clears pointer state and hides tooltip and crosshair.
    pub fn pointer_leave(&mut self) {
        trace!("pointer leave");
        let mut events = EventBuffer::new();
        self.apply_pointer(None, &mut events);
        self.emit_events(events);
    }

    #[must_use]
    pub fn pointer_state(&self) -> Option<PointerState> {
        self.interaction.pointer()
    }

    /// Value of the nearest sample, formatted with the configured precision.
    #[must_use]
    pub fn tooltip_label(&self) -> Option<String> {
        let pointer = self.interaction.pointer()?;
        let sample = self.samples.get(pointer.nearest_index)?;
        Some(format!(
            "{:.*}",
            self.config.tooltip_value_precision, sample.y
        ))
    }

    /// Page-space tooltip anchor.
    ///
    /// `Provisional` until the presentation layer reports the size of the box
    /// for the current label through [`Chart::measure_tooltip`].
    #[must_use]
    pub fn tooltip_anchor(&self) -> Option<TooltipAnchor> {
        let pointer = self.interaction.pointer()?;
        let label = self.tooltip_label()?;
        Some(self.interaction.tooltip_layout().anchor(
            pointer.screen_x,
            pointer.screen_y,
            self.scroll,
            &label,
        ))
    }

    /// Records the measured tooltip box for the current label and returns the
    /// final anchor. Returns `Ok(None)` while no pointer is active.
    pub fn measure_tooltip(&mut self, size: TooltipSize) -> ChartResult<Option<TooltipAnchor>> {
        if !size.is_valid() {
            return Err(ChartError::InvalidData(
                "tooltip size must be finite and >= 0".to_owned(),
            ));
        }
        let Some(label) = self.tooltip_label() else {
            return Ok(None);
        };

        trace!(width = size.width, height = size.height, %label, "tooltip measured");
        self.interaction
            .tooltip_layout_mut()
            .record_measurement(label, size);

        let mut events = EventBuffer::new();
        self.push_tooltip_placement(&mut events);
        self.emit_events(events);
        Ok(self.tooltip_anchor())
    }

    /// Second layout pass against a Cairo context: lays the current label out
    /// with Pango, adds the tooltip padding and arrow, and records that size.
    #[cfg(feature = "cairo-backend")]
    pub fn measure_tooltip_on_cairo_context(
        &mut self,
        context: &cairo::Context,
    ) -> ChartResult<Option<TooltipAnchor>> {
        let Some(label) = self.tooltip_label() else {
            return Ok(None);
        };
        let style = &self.config.style;
        let (text_width, text_height) =
            crate::render::measure_text(context, &label, style.tooltip_font_size_px);
        let size = tooltip_box_size(text_width, text_height, style);
        self.measure_tooltip(size)
    }

    /// Indicator dot and guide line for the current pointer.
    #[must_use]
    pub fn crosshair(&self) -> Option<CrosshairGeometry> {
        let pointer = self.interaction.pointer()?;
        Some(CrosshairGeometry::from_pointer(
            pointer,
            self.config.crosshair.dot_radius_px,
            self.container.height,
            self.config.margins.bottom,
        ))
    }

    /// Stroke color of the crosshair, looked up by gradient index.
    #[must_use]
    pub fn crosshair_color(&self) -> Option<RgbColor> {
        let pointer = self.interaction.pointer()?;
        Some(self.gradient.color_at(usize::from(pointer.gradient_index)))
    }

    pub(super) fn track_screen_pointer(&self, screen_x: f64, screen_y: f64) -> Option<PointerState> {
        if !self.container.is_measured() {
            return None;
        }
        let local_x = screen_x - self.container.left;
        let local_y = screen_y - self.container.top;
        if !self.geometry.hit_region.contains(local_x, local_y) {
            return None;
        }

        let hit_bounds = self
            .geometry
            .hit_bounds()?
            .translated(self.container.left, self.container.top);
        let hit = track_pointer(screen_x, screen_y, hit_bounds, self.samples.len())?;
        Some(PointerState::new(screen_x, screen_y, self.container, hit))
    }

    /// Re-runs tracking for the last pointer position after geometry changed.
    pub(super) fn retrack_pointer(&mut self, events: &mut EventBuffer) {
        let Some(previous) = self.interaction.pointer() else {
            return;
        };
        let next = self.track_screen_pointer(previous.screen_x, previous.screen_y);
        self.apply_pointer(next, events);
        self.push_tooltip_placement(events);
    }

    pub(super) fn apply_pointer(&mut self, next: Option<PointerState>, events: &mut EventBuffer) {
        match next {
            Some(state) => {
                if self.interaction.on_pointer_move(state) {
                    events.push(ChartEvent::PointerChanged { state });
                    self.push_tooltip_placement(events);
                }
            }
            None => {
                if self.interaction.on_pointer_leave() {
                    self.placed_tooltip = None;
                    events.push(ChartEvent::PointerLeft);
                }
            }
        }
    }

    /// Queues `TooltipPlaced` when the anchor moved since it was last reported.
    pub(super) fn push_tooltip_placement(&mut self, events: &mut EventBuffer) {
        let anchor = self.tooltip_anchor();
        if anchor == self.placed_tooltip {
            return;
        }
        self.placed_tooltip = anchor;
        if let Some(anchor) = anchor {
            events.push(ChartEvent::TooltipPlaced {
                left: anchor.left,
                top: anchor.top,
            });
        }
    }
}
