use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Rect};

/// Point in container-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PathPoint),
    LineTo(PathPoint),
    CubicTo {
        control1: PathPoint,
        control2: PathPoint,
        to: PathPoint,
    },
    Close,
}

/// Vector path made of move/line/cubic commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

/// Segments used when flattening each cubic for hit testing.
const FLATTEN_SEGMENTS_PER_CUBIC: usize = 16;

const EPSILON: f64 = 1e-12;

impl CurvePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Centripetal Catmull-Rom curve (alpha = 0.5) through every point.
    ///
    /// Two points produce a straight segment and one point a bare move.
    #[must_use]
    pub fn catmull_rom(points: &[PathPoint]) -> Self {
        let mut builder = CatmullRomBuilder::default();
        for point in points {
            builder.point(*point);
        }
        builder.finish()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, point: PathPoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: PathPoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Closed area between the curve and the plot baseline.
    #[must_use]
    pub fn fill_region(&self, plot: PlotArea) -> Self {
        let mut fill = self.clone();
        if fill.is_empty() {
            return fill;
        }
        fill.line_to(PathPoint::new(plot.right(), plot.bottom()));
        fill.line_to(PathPoint::new(plot.left(), plot.bottom()));
        fill.close();
        fill
    }

    /// Closed area between the curve and the plot top edge.
    ///
    /// Used only for pointer capture, so the region keeps responding while the
    /// pointer hovers anywhere above the line.
    #[must_use]
    pub fn hit_region(&self, plot: PlotArea) -> Self {
        let mut region = self.clone();
        if region.is_empty() {
            return region;
        }
        region.line_to(PathPoint::new(plot.right(), plot.top()));
        region.line_to(PathPoint::new(plot.left(), plot.top()));
        region.line_to(PathPoint::new(plot.left(), plot.bottom()));
        region.close();
        region
    }

    /// SVG path data (`d` attribute) for this path.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            // Writing into a String never fails.
            let _ = match command {
                PathCommand::MoveTo(p) => write!(out, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(out, "L{},{}", p.x, p.y),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    out,
                    "C{},{},{},{},{},{}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }

    /// Approximates the path as a polyline.
    #[must_use]
    pub fn flatten(&self) -> Vec<PathPoint> {
        let mut points = Vec::with_capacity(self.commands.len() * FLATTEN_SEGMENTS_PER_CUBIC);
        let mut current = PathPoint::new(0.0, 0.0);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    for step in 1..=FLATTEN_SEGMENTS_PER_CUBIC {
                        let t = step as f64 / FLATTEN_SEGMENTS_PER_CUBIC as f64;
                        points.push(cubic_point(current, control1, control2, to, t));
                    }
                    current = to;
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Tight bounds of the flattened geometry, or `None` for an empty path.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let points = self.flatten();
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Even-odd containment test against the flattened, implicitly closed path.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let polygon = self.flatten();
        if polygon.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut previous = polygon[polygon.len() - 1];
        for &point in &polygon {
            if (point.y > y) != (previous.y > y) {
                let crossing_x =
                    (previous.x - point.x) * (y - point.y) / (previous.y - point.y) + point.x;
                if x < crossing_x {
                    inside = !inside;
                }
            }
            previous = point;
        }
        inside
    }
}

fn cubic_point(p0: PathPoint, p1: PathPoint, p2: PathPoint, p3: PathPoint, t: f64) -> PathPoint {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    PathPoint::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Streaming Catmull-Rom builder.
///
/// Keeps a sliding window of three points plus the alpha-scaled chord lengths
/// between them; each new point emits the cubic for the previous segment.
#[derive(Debug, Default)]
struct CatmullRomBuilder {
    path: CurvePath,
    count: usize,
    p0: PathPoint,
    p1: PathPoint,
    p2: PathPoint,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
}

impl CatmullRomBuilder {
    const ALPHA: f64 = 0.5;

    fn point(&mut self, point: PathPoint) {
        if self.count > 0 {
            let dx = self.p2.x - point.x;
            let dy = self.p2.y - point.y;
            self.l23_2a = (dx * dx + dy * dy).powf(Self::ALPHA);
            self.l23_a = self.l23_2a.sqrt();
        }

        match self.count {
            0 => self.path.commands.push(PathCommand::MoveTo(point)),
            1 => {}
            _ => self.emit_segment(point),
        }
        self.count += 1;

        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.p0 = self.p1;
        self.p1 = self.p2;
        self.p2 = point;
    }

    /// Emits the cubic from `p1` to `p2`, using `next` as the far tangent hint.
    fn emit_segment(&mut self, next: PathPoint) {
        let mut control1 = self.p1;
        let mut control2 = self.p2;

        // The first segment has no real `p0`; its weight is zero there.
        if self.count > 2 && self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            control1 = PathPoint::new(
                (self.p1.x * a - self.p0.x * self.l12_2a + self.p2.x * self.l01_2a) / n,
                (self.p1.y * a - self.p0.y * self.l12_2a + self.p2.y * self.l01_2a) / n,
            );
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            control2 = PathPoint::new(
                (self.p2.x * b + self.p1.x * self.l23_2a - next.x * self.l12_2a) / m,
                (self.p2.y * b + self.p1.y * self.l23_2a - next.y * self.l12_2a) / m,
            );
        }

        self.path.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to: self.p2,
        });
    }

    fn finish(mut self) -> CurvePath {
        match self.count {
            2 => self.path.commands.push(PathCommand::LineTo(self.p2)),
            // Repeating the last point gives a zero-length far chord, so the
            // closing cubic ends with its control point on the endpoint.
            n if n >= 3 => {
                let last = self.p2;
                self.point(last);
            }
            _ => {}
        }
        self.path
    }
}
