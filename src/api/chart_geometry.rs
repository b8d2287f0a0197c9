use crate::core::{CurvePath, Domain, LinearScale, Margins, PathPoint, PlotArea, Rect, Sample};

/// Scales and paths derived from samples, container and margins.
///
/// Rebuilt wholesale whenever one of its inputs changes, so no path ever
/// refers to stale bounds.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartGeometry {
    pub plot_area: PlotArea,
    pub x_scale: Option<LinearScale>,
    pub y_scale: Option<LinearScale>,
    pub stroke: CurvePath,
    pub fill: CurvePath,
    pub hit_region: CurvePath,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            plot_area: PlotArea::ZERO,
            x_scale: None,
            y_scale: None,
            stroke: CurvePath::new(),
            fill: CurvePath::new(),
            hit_region: CurvePath::new(),
        }
    }
}

impl ChartGeometry {
    pub fn derive(samples: &[Sample], container: Rect, margins: Margins) -> Self {
        let plot_area = PlotArea::from_container(container, margins);
        let x_scale = Domain::from_x(samples).map(|domain| LinearScale::new(domain, plot_area.x_range()));
        let y_scale = Domain::from_y(samples).map(|domain| LinearScale::new(domain, plot_area.y_range()));

        let (Some(x), Some(y)) = (x_scale, y_scale) else {
            return Self {
                plot_area,
                ..Self::default()
            };
        };
        if !plot_area.is_measured() {
            return Self {
                plot_area,
                x_scale,
                y_scale,
                ..Self::default()
            };
        }

        let points: Vec<PathPoint> = samples
            .iter()
            .map(|sample| PathPoint::new(x.map(sample.x), y.map(sample.y)))
            .collect();
        let stroke = CurvePath::catmull_rom(&points);
        let fill = stroke.fill_region(plot_area);
        let hit_region = stroke.hit_region(plot_area);

        Self {
            plot_area,
            x_scale,
            y_scale,
            stroke,
            fill,
            hit_region,
        }
    }

    /// Container-local bounds of the pointer-capture region.
    pub fn hit_bounds(&self) -> Option<Rect> {
        self.hit_region.bounding_box()
    }
}
