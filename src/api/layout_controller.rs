use tracing::debug;

use crate::core::{CurvePath, LinearScale, PlotArea, Rect, ScrollOffset};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::chart_geometry::ChartGeometry;
use super::observer_dispatch::EventBuffer;
use super::Chart;

impl<R: Renderer> Chart<R> {
    /// Updates the measured container bounds in screen coordinates.
    ///
    /// A zero or negative size marks the container as unmeasured. Any change
    /// re-derives scales and paths, drops the tooltip measurement and tracks
    /// the last pointer position against the new geometry.
    pub fn set_container_bounds(&mut self, bounds: Rect) -> ChartResult<()> {
        if !bounds.left.is_finite()
            || !bounds.top.is_finite()
            || !bounds.width.is_finite()
            || !bounds.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "container bounds must be finite".to_owned(),
            ));
        }
        if bounds == self.container {
            return Ok(());
        }

        debug!(
            left = bounds.left,
            top = bounds.top,
            width = bounds.width,
            height = bounds.height,
            "set container bounds"
        );
        let resized = bounds.width != self.container.width || bounds.height != self.container.height;
        self.container = bounds;
        self.relayout();

        let mut events = EventBuffer::new();
        if resized {
            self.interaction.tooltip_layout_mut().invalidate();
            events.push(ChartEvent::LayoutChanged {
                width: bounds.width,
                height: bounds.height,
            });
        }
        self.retrack_pointer(&mut events);
        self.emit_events(events);
        Ok(())
    }

    #[must_use]
    pub fn container_bounds(&self) -> Rect {
        self.container
    }

    /// Updates the page scroll offset used for tooltip placement.
    pub fn set_scroll_offset(&mut self, scroll: ScrollOffset) -> ChartResult<()> {
        if !scroll.x.is_finite() || !scroll.y.is_finite() {
            return Err(ChartError::InvalidData(
                "scroll offset must be finite".to_owned(),
            ));
        }
        self.scroll = scroll;

        let mut events = EventBuffer::new();
        self.push_tooltip_placement(&mut events);
        self.emit_events(events);
        Ok(())
    }

    #[must_use]
    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.geometry.plot_area
    }

    /// X scale over the sample domain; `None` without samples.
    #[must_use]
    pub fn x_scale(&self) -> Option<LinearScale> {
        self.geometry.x_scale
    }

    /// Y scale over the sample domain, inverted so larger values sit higher.
    #[must_use]
    pub fn y_scale(&self) -> Option<LinearScale> {
        self.geometry.y_scale
    }

    #[must_use]
    pub fn stroke_path(&self) -> &CurvePath {
        &self.geometry.stroke
    }

    #[must_use]
    pub fn fill_path(&self) -> &CurvePath {
        &self.geometry.fill
    }

    #[must_use]
    pub fn hit_region_path(&self) -> &CurvePath {
        &self.geometry.hit_region
    }

    pub(super) fn relayout(&mut self) {
        self.geometry = ChartGeometry::derive(&self.samples, self.container, self.config.margins);
    }
}
