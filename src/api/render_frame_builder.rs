use crate::core::{CurvePath, GradientTable, PathPoint, ScrollOffset};
use crate::interaction::{TooltipAnchorPass, TooltipSize, tooltip_anchor};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, Paint, PathPrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{Chart, ChartStyle};

/// Average glyph advance relative to font size, used before a real measurement exists.
const ESTIMATED_GLYPH_WIDTH_RATIO: f64 = 0.6;
const ESTIMATED_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Tooltip box size around a laid-out label, arrow included.
#[must_use]
pub fn tooltip_box_size(text_width: f64, text_height: f64, style: &ChartStyle) -> TooltipSize {
    TooltipSize::new(
        text_width + 2.0 * style.tooltip_padding_x_px,
        text_height + 2.0 * style.tooltip_padding_y_px + style.tooltip_arrow_height_px,
    )
}

/// Approximate tooltip box size for `label` without a text layout engine.
///
/// Used when the host has not measured the current label yet.
#[must_use]
pub fn estimate_tooltip_size(label: &str, style: &ChartStyle) -> TooltipSize {
    let glyphs = label.chars().count() as f64;
    tooltip_box_size(
        glyphs * style.tooltip_font_size_px * ESTIMATED_GLYPH_WIDTH_RATIO,
        style.tooltip_font_size_px * ESTIMATED_LINE_HEIGHT_RATIO,
        style,
    )
}

impl<R: Renderer> Chart<R> {
    /// Materializes the current scene in container-local pixels.
    ///
    /// Returns `None` while the container is unmeasured. The crosshair layer
    /// is drawn first so the opaque area fill masks the guide line below the
    /// curve.
    #[must_use]
    pub fn build_render_frame(&self) -> Option<RenderFrame> {
        if !self.container.is_measured() {
            return None;
        }
        let viewport = self.container.viewport();
        if !viewport.is_valid() {
            return None;
        }

        let mut frame = RenderFrame::new(viewport);
        self.push_crosshair_primitives(&mut frame);
        self.push_background_primitives(&mut frame);
        self.push_grid_primitives(&mut frame);
        self.push_series_primitives(&mut frame);
        self.push_tooltip_primitives(&mut frame);
        Some(frame)
    }

    fn push_crosshair_primitives(&self, frame: &mut RenderFrame) {
        let (Some(crosshair), Some(color)) = (self.crosshair(), self.crosshair_color()) else {
            return;
        };
        let stroke_width = self.config.crosshair.stroke_width_px;
        let color = color.to_color(1.0);
        let layer = frame.layer_mut(CanvasLayerKind::Crosshair);

        layer.circles.push(CirclePrimitive {
            center_x: crosshair.dot_x,
            center_y: crosshair.dot_y,
            radius: crosshair.dot_radius,
            stroke_width,
            stroke_color: color,
            fill_color: Some(self.config.style.background_fill_color.to_color(1.0)),
        });
        if crosshair.has_guide_line() {
            layer.lines.push(LinePrimitive::new(
                crosshair.line_x,
                crosshair.line_top,
                crosshair.line_x,
                crosshair.line_bottom,
                stroke_width,
                color,
            ));
        }
    }

    fn push_background_primitives(&self, frame: &mut RenderFrame) {
        if self.geometry.fill.is_empty() {
            return;
        }
        let fill = self.config.style.background_fill_color.to_color(1.0);
        frame
            .layer_mut(CanvasLayerKind::Background)
            .paths
            .push(PathPrimitive::filled(self.geometry.fill.clone(), Paint::Solid(fill)));
    }

    fn push_grid_primitives(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let margins = self.config.margins;
        let grid_color = style.grid_line_color.to_color(style.grid_line_alpha);
        let label_color = style.axis_label_color.to_color(1.0);
        let width = self.container.width;
        let height = self.container.height;
        let layer = frame.layer_mut(CanvasLayerKind::Grid);

        for tick in self.y_ticks() {
            layer.lines.push(LinePrimitive::new(
                0.0,
                tick.position_px,
                width - margins.right + style.y_grid_line_overhang_px,
                tick.position_px,
                style.grid_line_width_px,
                grid_color,
            ));
            layer.texts.push(TextPrimitive::new(
                tick.label,
                0.0,
                tick.position_px,
                style.axis_label_font_size_px,
                label_color,
                TextHAlign::Left,
            ));
        }

        let x_line_bottom = height - margins.bottom + style.x_grid_line_overhang_px;
        let x_label_top = height - style.x_axis_label_offset_px - style.axis_label_font_size_px;
        for tick in self.x_ticks() {
            layer.lines.push(LinePrimitive::new(
                tick.position_px,
                margins.top,
                tick.position_px,
                x_line_bottom,
                style.grid_line_width_px,
                grid_color,
            ));
            layer.texts.push(TextPrimitive::new(
                tick.label,
                tick.position_px,
                x_label_top,
                style.axis_label_font_size_px,
                label_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_series_primitives(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let (Some(stroke_paint), Some(fill_paint)) = (
            horizontal_gradient_paint(&self.geometry.stroke, &self.gradient),
            horizontal_gradient_paint(&self.geometry.fill, &self.gradient),
        ) else {
            return;
        };
        let layer = frame.layer_mut(CanvasLayerKind::Series);

        layer.paths.push(PathPrimitive::stroked(
            self.geometry.stroke.clone(),
            stroke_paint,
            style.series_line_width_px,
        ));
        layer.paths.push(
            PathPrimitive::filled(self.geometry.fill.clone(), fill_paint)
                .with_stroke(fill_paint, 1.0)
                .with_opacity(style.gradient_fill_opacity),
        );
    }

    fn push_tooltip_primitives(&self, frame: &mut RenderFrame) {
        let (Some(pointer), Some(label)) = (self.interaction.pointer(), self.tooltip_label()) else {
            return;
        };
        let style = &self.config.style;
        let layout = self.interaction.tooltip_layout();
        let size = match layout.measured_size() {
            Some(size) if layout.is_fresh_for(&label) => size,
            _ => estimate_tooltip_size(&label, style),
        };

        // Anchor in container-local space: drop page scroll and container offset.
        let local_scroll = ScrollOffset::new(-self.container.left, -self.container.top);
        let anchor = tooltip_anchor(
            pointer.screen_x,
            pointer.screen_y,
            local_scroll,
            size,
            TooltipAnchorPass::Final,
        );

        let box_height = (size.height - style.tooltip_arrow_height_px).max(0.0);
        let center_x = anchor.left + size.width / 2.0;
        let layer = frame.layer_mut(CanvasLayerKind::Overlay);
        layer.rects.push(
            RectPrimitive::new(
                anchor.left,
                anchor.top,
                size.width,
                box_height,
                style.tooltip_background_color.to_color(1.0),
            )
            .with_border(1.0, style.tooltip_border_color.to_color(1.0))
            .with_corner_radius(style.tooltip_corner_radius_px),
        );
        if style.tooltip_arrow_width_px > 0.0 && style.tooltip_arrow_height_px > 0.0 {
            // Downward arrow between the box and the pointer.
            let half_width = style.tooltip_arrow_width_px / 2.0;
            let base_y = anchor.top + box_height;
            let mut arrow = CurvePath::new();
            arrow.move_to(PathPoint::new(center_x - half_width, base_y));
            arrow.line_to(PathPoint::new(center_x + half_width, base_y));
            arrow.line_to(PathPoint::new(center_x, base_y + style.tooltip_arrow_height_px));
            arrow.close();
            layer.paths.push(PathPrimitive::filled(
                arrow,
                Paint::Solid(style.tooltip_arrow_color.to_color(1.0)),
            ));
        }
        layer.texts.push(TextPrimitive::new(
            label,
            center_x,
            anchor.top + style.tooltip_padding_y_px,
            style.tooltip_font_size_px,
            style.tooltip_text_color.to_color(1.0),
            TextHAlign::Center,
        ));
    }
}

/// Gradient spanning the path's bounding box from left to right.
fn horizontal_gradient_paint(path: &CurvePath, gradient: &GradientTable) -> Option<Paint> {
    let bounds = path.bounding_box()?;
    Some(Paint::HorizontalGradient {
        x_start: bounds.left,
        x_end: bounds.right(),
        start: gradient.start().to_color(1.0),
        end: gradient.end().to_color(1.0),
    })
}
