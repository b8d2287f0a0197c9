//! curve-chart: smoothed single-series line chart with pointer tracking.
//!
//! The crate maps an ordered series onto a measured container, builds a
//! centripetal Catmull-Rom curve with its fill and pointer-capture regions,
//! and resolves pointer positions into the nearest sample, a gradient color
//! and a two-pass tooltip anchor. Drawing goes through the [`render::Renderer`]
//! trait, with an optional Cairo backend and GTK4 adapter.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
