mod axis_ticks;
mod chart;
mod chart_config;
mod chart_geometry;
mod data_controller;
mod interaction_controller;
mod layout_controller;
mod observer_dispatch;
mod observer_registry;
mod render_frame_builder;
mod render_style;
mod snapshot;
mod validation;

pub use axis_ticks::AxisTick;
pub use chart::Chart;
pub use chart_config::{ChartConfig, CrosshairStyle, GradientConfig};
pub use render_frame_builder::{estimate_tooltip_size, tooltip_box_size};
pub use render_style::ChartStyle;
pub use snapshot::ChartSnapshot;
