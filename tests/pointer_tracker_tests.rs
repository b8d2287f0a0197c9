use curve_chart::core::{Rect, ScrollOffset};
use curve_chart::interaction::{
    CrosshairGeometry, MAX_GRADIENT_INDEX, PointerState, TooltipAnchorPass, TooltipLayout,
    TooltipSize, gradient_index, nearest_sample_index, track_pointer, tooltip_anchor,
};

const HIT_BOUNDS: Rect = Rect::new(100.0, 50.0, 660.0, 300.0);

#[test]
fn twelve_samples_over_660px() {
    // cell width 60px; raw index = floor(round(rel_x) / 60) + 1
    let at = |rel_x: f64| {
        track_pointer(HIT_BOUNDS.left + rel_x, 80.0, HIT_BOUNDS, 12)
            .expect("tracked")
            .nearest_index
    };
    assert_eq!(at(0.0), 1);
    assert_eq!(at(59.0), 1);
    assert_eq!(at(60.0), 2);
    assert_eq!(at(599.0), 10);
    assert_eq!(at(600.0), 11);
    assert_eq!(at(660.0), 11);
    assert_eq!(at(-0.5), 1);
    assert_eq!(at(-1.0), 0);
}

#[test]
fn gradient_index_follows_relative_position() {
    let at = |rel_x: f64| {
        track_pointer(HIT_BOUNDS.left + rel_x, 80.0, HIT_BOUNDS, 12)
            .expect("tracked")
            .gradient_index
    };
    assert_eq!(at(0.0), 0);
    assert_eq!(at(330.0), 50);
    assert_eq!(at(659.0), 99);
    assert_eq!(at(660.0), 100);
    assert_eq!(at(-40.0), 0);
    assert_eq!(at(2_000.0), MAX_GRADIENT_INDEX);
}

#[test]
fn two_samples_use_a_single_cell() {
    assert_eq!(nearest_sample_index(0.0, 660.0, 2), 1);
    assert_eq!(nearest_sample_index(-3.0, 660.0, 2), 0);
    assert_eq!(nearest_sample_index(660.0, 660.0, 2), 1);
}

#[test]
fn untrackable_inputs_produce_no_hit() {
    assert!(track_pointer(300.0, 80.0, HIT_BOUNDS, 1).is_none());
    assert!(track_pointer(300.0, f64::INFINITY, HIT_BOUNDS, 12).is_none());
    assert!(track_pointer(300.0, 80.0, Rect::new(100.0, 50.0, -5.0, 300.0), 12).is_none());
    assert_eq!(gradient_index(f64::NAN, 660.0), 0);
}

#[test]
fn pointer_state_keeps_screen_and_local_positions() {
    let container = Rect::new(25.0, 10.0, 755.0, 380.0);
    let hit = track_pointer(430.0, 80.0, HIT_BOUNDS, 12).expect("tracked");
    let state = PointerState::new(430.0, 80.0, container, hit);
    assert_eq!((state.screen_x, state.screen_y), (430.0, 80.0));
    assert_eq!((state.local_x, state.local_y), (405.0, 70.0));
    assert_eq!(state.hit(), hit);
}

#[test]
fn tooltip_centers_above_pointer_with_scroll() {
    let anchor = tooltip_anchor(
        430.0,
        80.0,
        ScrollOffset::new(0.0, 120.0),
        TooltipSize::new(90.0, 34.0),
        TooltipAnchorPass::Final,
    );
    assert_eq!((anchor.left, anchor.top), (385.0, 166.0));
}

#[test]
fn two_pass_layout_settles_after_measurement() {
    let mut layout = TooltipLayout::default();
    let first = layout.anchor(430.0, 80.0, ScrollOffset::default(), "0.000");
    assert_eq!(first.pass, TooltipAnchorPass::Provisional);
    assert_eq!((first.left, first.top), (430.0, 80.0));

    layout.record_measurement("0.000", TooltipSize::new(90.0, 34.0));
    let second = layout.anchor(430.0, 80.0, ScrollOffset::default(), "0.000");
    assert_eq!(second.pass, TooltipAnchorPass::Final);
    assert_eq!((second.left, second.top), (385.0, 46.0));

    layout.invalidate();
    let after_leave = layout.anchor(430.0, 80.0, ScrollOffset::default(), "0.000");
    assert_eq!(after_leave.pass, TooltipAnchorPass::Provisional);
}

#[test]
fn crosshair_geometry_hangs_below_pointer() {
    let container = Rect::new(0.0, 0.0, 755.0, 380.0);
    let hit = track_pointer(300.0, 120.0, HIT_BOUNDS, 12).expect("tracked");
    let state = PointerState::new(300.0, 120.0, container, hit);
    let crosshair = CrosshairGeometry::from_pointer(state, 4.0, 380.0, 40.0);

    assert_eq!((crosshair.dot_x, crosshair.dot_y), (300.0, 124.0));
    assert_eq!(crosshair.line_top, 128.0);
    assert_eq!(crosshair.line_bottom, 339.0);
    assert_eq!(crosshair.gradient_index, hit.gradient_index);

    let low = PointerState::new(300.0, 338.0, container, hit);
    assert!(!CrosshairGeometry::from_pointer(low, 4.0, 380.0, 40.0).has_guide_line());
}
