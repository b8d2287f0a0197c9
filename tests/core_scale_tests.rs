use approx::assert_relative_eq;
use curve_chart::ChartError;
use curve_chart::core::{Domain, LinearScale, MAX_TICK_COUNT, Margins, PlotArea, Rect, Sample};

fn plot_for(width: f64, height: f64) -> PlotArea {
    PlotArea::from_container(Rect::new(0.0, 0.0, width, height), Margins::default())
}

#[test]
fn x_scale_maps_domain_ends_onto_plot_edges() {
    let samples = Sample::series_from_values(&[3.0, 1.0, 4.0, 1.0, 5.0]);
    let plot = plot_for(755.0, 380.0);
    let domain = Domain::from_x(&samples).expect("x domain");
    let scale = LinearScale::new(domain, plot.x_range());

    assert_eq!(scale.map(0.0), 75.0);
    assert_eq!(scale.map(4.0), 735.0);
    assert_relative_eq!(scale.map(2.0), 405.0);
}

#[test]
fn y_scale_is_inverted() {
    let samples = Sample::series_from_values(&[2.0, 6.0, 4.0]);
    let plot = plot_for(755.0, 380.0);
    let domain = Domain::from_y(&samples).expect("y domain");
    let scale = LinearScale::new(domain, plot.y_range());

    assert_eq!(scale.map(2.0), 340.0);
    assert_eq!(scale.map(6.0), 40.0);
    assert!(scale.map(5.0) < scale.map(3.0));
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(Domain::new(10.0, 110.0).expect("domain"), (0.0, 1000.0));
    let original = 42.5;
    let recovered = scale.invert(scale.map(original));
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let samples = Sample::series_from_values(&[7.0, 7.0, 7.0]);
    let domain = Domain::from_y(&samples).expect("y domain");
    assert!(domain.is_degenerate());

    let scale = LinearScale::new(domain, (340.0, 40.0));
    for value in [-1.0e9, 0.0, 7.0, 1.0e9] {
        assert_eq!(scale.map(value), 190.0);
    }
    assert_eq!(scale.invert(12.0), 7.0);
    assert_eq!(scale.ticks(8), vec![7.0]);
}

#[test]
fn unmeasured_container_collapses_every_output_to_zero() {
    let plot = PlotArea::from_container(Rect::ZERO, Margins::default());
    assert!(!plot.is_measured());

    let scale = LinearScale::new(Domain::new(0.0, 10.0).expect("domain"), plot.x_range());
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(10.0), 0.0);
    assert_eq!(scale.invert(5.0), 0.0);
}

#[test]
fn margins_wider_than_container_clamp_plot_to_zero_size() {
    let plot = plot_for(60.0, 50.0);
    assert!(plot.is_measured());
    assert_eq!(plot.rect.width, 0.0);
    assert_eq!(plot.rect.height, 0.0);
    assert_eq!(plot.x_range(), (75.0, 75.0));
}

#[test]
fn ticks_follow_round_number_increments() {
    let scale = LinearScale::new(Domain::new(0.0, 1.0).expect("domain"), (0.0, 100.0));
    let ticks = scale.ticks(5);
    assert_eq!(ticks.len(), 6);
    for (tick, expected) in ticks.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
        assert_relative_eq!(*tick, expected);
    }

    let scale = LinearScale::new(Domain::new(3.0, 97.0).expect("domain"), (0.0, 100.0));
    assert_eq!(scale.ticks(4), vec![20.0, 40.0, 60.0, 80.0]);
    assert!(scale.ticks(0).is_empty());
}

#[test]
fn ticks_stay_inside_small_value_domains() {
    let scale = LinearScale::new(
        Domain::new(0.000_118_9, 0.000_158_3).expect("domain"),
        (340.0, 40.0),
    );
    let ticks = scale.ticks(8);
    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ticks.iter().all(|tick| (0.000_118_9..=0.000_158_3).contains(tick)));
}

#[test]
fn extreme_tick_requests_return_no_ticks() {
    let scale = LinearScale::new(Domain::new(0.0, 100.0).expect("domain"), (0.0, 600.0));
    assert!(scale.ticks(usize::MAX).is_empty());
    assert!(scale.ticks(MAX_TICK_COUNT + 1).is_empty());

    let ticks = scale.ticks(MAX_TICK_COUNT);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&100.0));

    let wide = LinearScale::new(Domain::new(-f64::MAX, f64::MAX).expect("domain"), (0.0, 600.0));
    assert!(wide.ticks(8).is_empty());
}

#[test]
fn invalid_domains_are_rejected() {
    assert!(matches!(Domain::new(2.0, 1.0), Err(ChartError::InvalidData(_))));
    assert!(matches!(Domain::new(f64::NAN, 1.0), Err(ChartError::InvalidData(_))));
    assert!(Domain::from_values(std::iter::empty()).is_none());
    assert!(Domain::from_x(&[]).is_none());
}
