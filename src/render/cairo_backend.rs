use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LayerPrimitives, Paint, PathPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an image surface through `Renderer::render`, or in
/// place on an external Cairo context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(0.106, 0.106, 0.106),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for path in &layer.paths {
        draw_path(context, path)?;
        stats.paths_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for circle in &layer.circles {
        context.new_path();
        context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, 2.0 * PI);
        if let Some(fill) = circle.fill_color {
            apply_color(context, fill);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
        }
        apply_color(context, circle.stroke_color);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
        stats.circles_drawn += 1;
    }

    for rect in &layer.rects {
        append_rect_path(context, *rect);
        apply_color(context, rect.fill_color);
        if rect.border_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(context, rect.border_color);
            context.set_line_width(rect.border_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        stats.rects_drawn += 1;
    }

    for text in &layer.texts {
        let layout = text_layout(context, &text.text, text.font_size_px);
        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

/// Pixel size of `text` as laid out by Pango on `context`.
#[must_use]
pub fn measure_text(context: &Context, text: &str, font_size_px: f64) -> (f64, f64) {
    let (width, height) = text_layout(context, text, font_size_px).pixel_size();
    (f64::from(width), f64::from(height))
}

fn text_layout(context: &Context, text: &str, font_size_px: f64) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);
    layout
}

fn draw_path(context: &Context, primitive: &PathPrimitive) -> ChartResult<()> {
    context.new_path();
    for command in primitive.path.commands() {
        match *command {
            PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
            PathCommand::LineTo(p) => context.line_to(p.x, p.y),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => context.curve_to(control1.x, control1.y, control2.x, control2.y, to.x, to.y),
            PathCommand::Close => context.close_path(),
        }
    }

    if let Some(fill) = primitive.fill {
        apply_paint(context, fill, primitive.opacity)?;
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }
    if let Some(stroke) = primitive.stroke {
        apply_paint(context, stroke, primitive.opacity)?;
        context.set_line_width(primitive.stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }
    context.new_path();
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_paint(context: &Context, paint: Paint, opacity: f64) -> ChartResult<()> {
    match paint {
        Paint::Solid(color) => {
            apply_color(context, color.with_alpha(color.alpha * opacity));
            Ok(())
        }
        Paint::HorizontalGradient {
            x_start,
            x_end,
            start,
            end,
        } => {
            let gradient = LinearGradient::new(x_start, 0.0, x_end, 0.0);
            gradient.add_color_stop_rgba(0.0, start.red, start.green, start.blue, start.alpha * opacity);
            gradient.add_color_stop_rgba(1.0, end.red, end.green, end.blue, end.alpha * opacity);
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
