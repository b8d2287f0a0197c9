use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{GradientTable, Rect, Sample, ScrollOffset};
use crate::error::ChartResult;
use crate::extensions::{ChartEvent, ChartObserver};
use crate::interaction::{InteractionState, TooltipAnchor};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_geometry::ChartGeometry;
use super::validation::validate_chart_config;
use super::ChartConfig;

/// Main facade consumed by host applications.
///
/// `Chart` owns the samples, the measured container, the derived scales and
/// paths, the pointer state and the renderer. Every mutation re-derives the
/// dependent state synchronously and notifies observers about what changed.
pub struct Chart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) gradient: GradientTable,
    pub(super) samples: Vec<Sample>,
    pub(super) container: Rect,
    pub(super) scroll: ScrollOffset,
    pub(super) geometry: ChartGeometry,
    pub(super) interaction: InteractionState,
    /// Last anchor reported through `ChartEvent::TooltipPlaced`.
    pub(super) placed_tooltip: Option<TooltipAnchor>,
    pub(super) observers: IndexMap<String, Box<dyn ChartObserver>>,
}

impl<R: Renderer> Chart<R> {
    /// Validates `config` and builds the gradient table once.
    ///
    /// The chart starts without samples and with an unmeasured container.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let gradient = validate_chart_config(&config)?;
        debug!(
            gradient_steps = gradient.len(),
            start = %gradient.start(),
            end = %gradient.end(),
            "chart created"
        );

        Ok(Self {
            renderer,
            config,
            gradient,
            samples: Vec::new(),
            container: Rect::ZERO,
            scroll: ScrollOffset::default(),
            geometry: ChartGeometry::default(),
            interaction: InteractionState::default(),
            placed_tooltip: None,
            observers: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn gradient(&self) -> &GradientTable {
        &self.gradient
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Builds the current frame and hands it to the renderer.
    ///
    /// Skipped without error while the container is unmeasured.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame() else {
            warn!(
                width = self.container.width,
                height = self.container.height,
                "skipping render of unmeasured container"
            );
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while the renderer stays free of GTK APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame() else {
            warn!("skipping cairo draw of unmeasured container");
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
