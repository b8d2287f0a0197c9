use chrono::NaiveDate;
use curve_chart::api::{Chart, ChartConfig, ChartStyle, estimate_tooltip_size, tooltip_box_size};
use curve_chart::core::{PathCommand, PathPoint, Rect, RgbColor};
use curve_chart::interaction::TooltipSize;
use curve_chart::render::{CanvasLayerKind, NullRenderer, Paint, TextHAlign};

fn anchored_config() -> ChartConfig {
    ChartConfig::default().with_x_axis_anchor_date(NaiveDate::from_ymd_opt(2024, 3, 12).expect("date"))
}

fn chart() -> Chart<NullRenderer> {
    let mut chart = Chart::new(NullRenderer::default(), anchored_config()).expect("chart init");
    chart
        .set_values(&(1..=12).map(f64::from).collect::<Vec<_>>())
        .expect("set values");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("container");
    chart
}

#[test]
fn layers_follow_canonical_order() {
    let frame = chart().build_render_frame().expect("frame");
    let kinds: Vec<CanvasLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, CanvasLayerKind::canonical_order().to_vec());
    assert_eq!(kinds[0], CanvasLayerKind::Crosshair);
    assert!(frame.validate().is_ok());
}

#[test]
fn idle_frame_has_fill_grid_and_series_only() {
    let frame = chart().build_render_frame().expect("frame");
    assert!(frame.layer(CanvasLayerKind::Crosshair).expect("layer").is_empty());
    assert!(frame.layer(CanvasLayerKind::Overlay).expect("layer").is_empty());

    let background = frame.layer(CanvasLayerKind::Background).expect("layer");
    assert_eq!(background.paths.len(), 1);
    assert_eq!(
        background.paths[0].fill,
        Some(Paint::Solid(RgbColor::new(0x1b, 0x1b, 0x1b).to_color(1.0)))
    );

    let series = frame.layer(CanvasLayerKind::Series).expect("layer");
    assert_eq!(series.paths.len(), 2);
    assert!(series.paths[0].fill.is_none());
    assert_eq!(series.paths[0].stroke_width, 2.0);
    assert_eq!(series.paths[1].opacity, 0.2);
    let Some(Paint::HorizontalGradient { x_start, x_end, .. }) = series.paths[0].stroke else {
        panic!("line should use the horizontal gradient");
    };
    assert_eq!((x_start, x_end), (75.0, 735.0));
}

#[test]
fn grid_lines_and_labels_follow_ticks() {
    let chart = chart();
    let x_ticks = chart.x_ticks();
    let y_ticks = chart.y_ticks();
    let frame = chart.build_render_frame().expect("frame");
    let grid = frame.layer(CanvasLayerKind::Grid).expect("layer");

    assert_eq!(grid.lines.len(), x_ticks.len() + y_ticks.len());
    assert_eq!(grid.texts.len(), x_ticks.len() + y_ticks.len());

    let first_y_line = grid.lines[0];
    assert_eq!(first_y_line.x1, 0.0);
    assert_eq!(first_y_line.x2, 741.0);
    assert_eq!(first_y_line.color.alpha, ChartStyle::default().grid_line_alpha);

    let x_line = grid.lines[y_ticks.len()];
    assert_eq!((x_line.y1, x_line.y2), (40.0, 348.0));

    let x_label = &grid.texts[y_ticks.len()];
    assert_eq!(x_label.h_align, TextHAlign::Center);
    assert_eq!(x_label.y, 350.0);
}

#[test]
fn axis_tick_labels() {
    let chart = chart();
    let y_ticks = chart.y_ticks();
    assert_eq!(y_ticks.first().map(|tick| tick.label.as_str()), Some("1.00000000"));
    assert_eq!(y_ticks.first().map(|tick| tick.position_px), Some(340.0));

    let x_ticks = chart.x_ticks();
    assert_eq!(x_ticks.len(), 12);
    assert_eq!(x_ticks[11].label, "12 Mar");
    assert_eq!(x_ticks[0].label, "1 Mar");
    assert_eq!(x_ticks[0].position_px, 75.0);
}

#[test]
fn hovered_frame_draws_crosshair_and_tooltip() {
    let mut chart = chart();
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    let frame = chart.build_render_frame().expect("frame");

    let crosshair = frame.layer(CanvasLayerKind::Crosshair).expect("layer");
    assert_eq!(crosshair.circles.len(), 1);
    assert_eq!(crosshair.lines.len(), 1);
    let expected = chart.gradient().color_at(50).to_color(1.0);
    assert_eq!(crosshair.circles[0].stroke_color, expected);
    assert_eq!(crosshair.lines[0].color, expected);
    assert_eq!((crosshair.circles[0].center_x, crosshair.circles[0].center_y), (405.0, 104.0));

    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("layer");
    assert_eq!(overlay.rects.len(), 1);
    assert_eq!(overlay.texts[0].text, "7.000");
    let estimate = estimate_tooltip_size("7.000", &ChartStyle::default());
    assert_eq!(overlay.rects[0].width, estimate.width);
    assert_eq!(overlay.rects[0].y, 100.0 - estimate.height);
}

#[test]
fn measured_tooltip_size_is_used_when_fresh() {
    let mut chart = chart();
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    chart
        .measure_tooltip(TooltipSize::new(90.0, 34.0))
        .expect("measure");

    let frame = chart.build_render_frame().expect("frame");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("layer");
    let rect = overlay.rects[0];
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (360.0, 66.0, 90.0, 29.0));
}

#[test]
fn tooltip_arrow_points_down_at_the_cursor() {
    let mut chart = chart();
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    chart
        .measure_tooltip(TooltipSize::new(90.0, 34.0))
        .expect("measure");

    let frame = chart.build_render_frame().expect("frame");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("layer");
    assert_eq!(overlay.paths.len(), 1);
    let arrow = &overlay.paths[0];
    assert_eq!(
        arrow.fill,
        Some(Paint::Solid(RgbColor::new(0x39, 0xb0, 0x4a).to_color(1.0)))
    );
    assert_eq!(
        arrow.path.commands(),
        &[
            PathCommand::MoveTo(PathPoint::new(401.0, 95.0)),
            PathCommand::LineTo(PathPoint::new(409.0, 95.0)),
            PathCommand::LineTo(PathPoint::new(405.0, 100.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn arrow_is_dropped_when_its_size_is_zero() {
    let style = ChartStyle {
        tooltip_arrow_height_px: 0.0,
        ..ChartStyle::default()
    };
    let mut chart = Chart::new(NullRenderer::default(), anchored_config().with_style(style))
        .expect("chart init");
    chart
        .set_values(&(1..=12).map(f64::from).collect::<Vec<_>>())
        .expect("set values");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("container");
    chart.pointer_move(405.0, 100.0).expect("pointer captured");

    let frame = chart.build_render_frame().expect("frame");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("layer");
    assert!(overlay.paths.is_empty());
    assert_eq!(overlay.rects[0].height, estimate_tooltip_size("7.000", &style).height);
}

#[test]
fn box_size_wraps_text_with_padding_and_arrow() {
    let style = ChartStyle::default();
    let size = tooltip_box_size(40.0, 17.0, &style);
    assert_eq!((size.width, size.height), (64.0, 38.0));
    let estimate = estimate_tooltip_size("7.000", &style);
    assert_eq!(estimate.width, 5.0 * 14.0 * 0.6 + 24.0);
}

#[test]
fn render_is_skipped_for_unmeasured_container() {
    let mut chart = Chart::new(NullRenderer::default(), anchored_config()).expect("chart init");
    chart.set_values(&[1.0, 2.0, 3.0]).expect("set values");
    assert!(chart.build_render_frame().is_none());
    chart.render().expect("render");
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn render_hands_frame_to_renderer() {
    let mut chart = chart();
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_path_count, 4);
    assert_eq!(renderer.last_circle_count, 1);
}

#[test]
fn snapshot_exposes_derived_state_as_json() {
    let mut chart = chart();
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    let snapshot = chart.snapshot();
    assert!(snapshot.stroke_path.starts_with("M75,340"));
    assert!(snapshot.hit_region_path.ends_with("L735,40L75,40L75,340Z"));
    assert_eq!(snapshot.tooltip_label.as_deref(), Some("7.000"));
    assert_eq!(
        snapshot.crosshair_color,
        Some(chart.gradient().color_at(50).to_hex())
    );

    let json = chart.snapshot_json_pretty().expect("json");
    assert!(json.contains("\"tooltip_label\": \"7.000\""));
}
