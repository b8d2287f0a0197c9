//! GTK4 embedding: a `DrawingArea` that draws a [`Chart`] through Cairo and
//! forwards pointer motion to it.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::Chart;
use crate::core::Rect;
use crate::interaction::TooltipAnchorPass;
use crate::render::{CairoContextRenderer, Renderer};

/// Shared handle to the chart driven by a [`GtkChartAdapter`].
pub type SharedChart<R> = Rc<RefCell<Chart<R>>>;

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    drawing_area: gtk::DrawingArea,
    chart: SharedChart<R>,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    /// Wraps `chart` in a drawing area.
    ///
    /// The widget allocation becomes the container bounds on every draw, so
    /// pointer coordinates reported by GTK are container-local and the page
    /// scroll offset stays zero.
    #[must_use]
    pub fn new(chart: Chart<R>) -> Self {
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        let chart = Rc::new(RefCell::new(chart));

        {
            let chart = Rc::clone(&chart);
            drawing_area.set_draw_func(move |_, context, width, height| {
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = draw_chart(&mut chart, context, width, height) {
                    warn!(error = %err, "chart draw failed");
                }
            });
        }

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    chart.pointer_move(x, y);
                }
                drawing_area.queue_draw();
            });
        }
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.clone();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    chart.pointer_leave();
                }
                drawing_area.queue_draw();
            });
        }
        drawing_area.add_controller(motion);

        Self {
            drawing_area,
            chart,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart<R> {
        Rc::clone(&self.chart)
    }
}

fn draw_chart<R: Renderer + CairoContextRenderer>(
    chart: &mut Chart<R>,
    context: &cairo::Context,
    width: i32,
    height: i32,
) -> crate::ChartResult<()> {
    chart.set_container_bounds(Rect::new(0.0, 0.0, f64::from(width), f64::from(height)))?;

    // Second layout pass: measure the laid-out label on this context.
    let provisional = chart
        .tooltip_anchor()
        .is_some_and(|anchor| anchor.pass == TooltipAnchorPass::Provisional);
    if provisional {
        chart.measure_tooltip_on_cairo_context(context)?;
    }

    chart.render_on_cairo_context(context)
}
