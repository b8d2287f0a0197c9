use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in CSS-like pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Bounds of a container that has not been measured yet.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Returns `true` once the rectangle has a positive, finite area.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }

    /// Integer render target covering this rectangle's size.
    #[must_use]
    pub fn viewport(self) -> Viewport {
        let width = if self.width.is_finite() && self.width > 0.0 {
            self.width.round() as u32
        } else {
            0
        };
        let height = if self.height.is_finite() && self.height > 0.0 {
            self.height.round() as u32
        } else {
            0
        };
        Viewport::new(width, height)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Pixels reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 20.0,
            bottom: 40.0,
            left: 75.0,
        }
    }
}

impl Margins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Document scroll applied when placing page-positioned overlays.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot rectangle in container-local coordinates.
///
/// Width and height never go negative: margins wider than the container
/// collapse the plot to zero size at the left/top margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub container_width: f64,
    pub container_height: f64,
    pub rect: Rect,
}

impl PlotArea {
    pub const ZERO: Self = Self {
        container_width: 0.0,
        container_height: 0.0,
        rect: Rect::ZERO,
    };

    #[must_use]
    pub fn from_container(container: Rect, margins: Margins) -> Self {
        if !container.is_measured() {
            return Self::ZERO;
        }

        let width = (container.width - margins.left - margins.right).max(0.0);
        let height = (container.height - margins.top - margins.bottom).max(0.0);
        Self {
            container_width: container.width,
            container_height: container.height,
            rect: Rect::new(margins.left, margins.top, width, height),
        }
    }

    #[must_use]
    pub fn is_measured(self) -> bool {
        self.container_width > 0.0 && self.container_height > 0.0
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        if !self.is_measured() {
            return (0.0, 0.0);
        }
        (self.rect.left, self.rect.right())
    }

    /// Vertical pixel range, inverted so larger values sit higher.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        if !self.is_measured() {
            return (0.0, 0.0);
        }
        (self.rect.bottom(), self.rect.top)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.rect.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.rect.right()
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.rect.top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.rect.bottom()
    }
}
