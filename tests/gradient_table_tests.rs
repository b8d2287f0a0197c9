use curve_chart::ChartError;
use curve_chart::core::{GRADIENT_STEPS, GradientTable, RgbColor};

#[test]
fn default_table_has_101_entries_with_exact_endpoints() {
    let table = GradientTable::from_hex("#FFF961", "#34D399").expect("gradient");
    assert_eq!(table.len(), GRADIENT_STEPS);
    assert_eq!(table.color_at(0), RgbColor::new(0xff, 0xf9, 0x61));
    assert_eq!(table.color_at(100), RgbColor::new(0x34, 0xd3, 0x99));
}

#[test]
fn channels_are_monotonic_between_endpoints() {
    let table = GradientTable::from_hex("#102030", "#f0e0d0").expect("gradient");
    for pair in table.colors().windows(2) {
        assert!(pair[0].red <= pair[1].red);
        assert!(pair[0].green <= pair[1].green);
        assert!(pair[0].blue <= pair[1].blue);
    }
}

#[test]
fn equal_endpoints_yield_identical_entries() {
    let table = GradientTable::from_hex("#39b04a", "#39B04A").expect("gradient");
    assert_eq!(table.len(), 101);
    assert!(table.colors().iter().all(|color| *color == RgbColor::new(0x39, 0xb0, 0x4a)));
}

#[test]
fn lookups_clamp_to_the_table() {
    let table = GradientTable::from_hex("#000", "#fff").expect("gradient");
    assert_eq!(table.color_at(500), RgbColor::new(255, 255, 255));
    assert_eq!(table.end(), table.color_at(100));
}

#[test]
fn midpoint_rounds_each_channel() {
    let table = GradientTable::from_hex("#000000", "#010203").expect("gradient");
    assert_eq!(table.color_at(50), RgbColor::new(1, 1, 2));
}

#[test]
fn accepted_hex_forms() {
    assert_eq!(RgbColor::from_hex("#abc").expect("short"), RgbColor::new(0xaa, 0xbb, 0xcc));
    assert_eq!(RgbColor::from_hex("34D399").expect("bare"), RgbColor::new(0x34, 0xd3, 0x99));
    let parsed: RgbColor = "#FFF961".parse().expect("from_str");
    assert_eq!(parsed.to_string(), "rgb(255,249,97)");
    assert_eq!(parsed.to_hex(), "#fff961");
}

#[test]
fn malformed_colors_are_configuration_errors() {
    for input in ["", "#12345", "#ggg", "rgb(1,2,3)", "#1234567"] {
        let result = RgbColor::from_hex(input);
        assert!(
            matches!(result, Err(ChartError::InvalidColor { .. })),
            "`{input}` should be rejected"
        );
    }
    assert!(matches!(
        GradientTable::from_hex("#FFF961", "nope"),
        Err(ChartError::InvalidColor { .. })
    ));
}

#[test]
fn fewer_than_two_steps_is_rejected() {
    let result = GradientTable::build("#000", "#fff", 1);
    assert!(matches!(result, Err(ChartError::InvalidConfiguration(_))));
}
