pub mod curve;
pub mod domain;
pub mod gradient;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use curve::{CurvePath, PathCommand, PathPoint};
pub use domain::Domain;
pub use gradient::{GRADIENT_STEPS, GradientTable, RgbColor};
pub use layout::{Margins, PlotArea, Rect, ScrollOffset};
pub use scale::{LinearScale, MAX_TICK_COUNT};
pub use types::{Sample, Viewport};
