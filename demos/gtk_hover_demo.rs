use curve_chart::api::{Chart, ChartConfig};
use curve_chart::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

const DEMO_VALUES: [f64; 12] = [
    0.000_120_4, 0.000_118_9, 0.000_125_2, 0.000_131_7, 0.000_129_3, 0.000_136_8, 0.000_142_1,
    0.000_139_5, 0.000_147_6, 0.000_151_2, 0.000_149_8, 0.000_158_3,
];

fn main() {
    let _ = curve_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.curve_chart.demos.gtk_hover_demo")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize hover demo chart: {err}");
            return;
        }
    };

    let adapter = curve_chart::platform_gtk::GtkChartAdapter::new(chart);
    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("curve-chart hover demo")
        .default_width(755)
        .default_height(380)
        .child(adapter.drawing_area())
        .build();
    window.present();
}

fn build_chart() -> curve_chart::ChartResult<Chart<CairoRenderer>> {
    let renderer = CairoRenderer::new(755, 380)?;
    let mut chart = Chart::new(renderer, ChartConfig::default())?;
    chart.set_values(&DEMO_VALUES)?;
    Ok(chart)
}
