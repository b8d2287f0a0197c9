use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::core::primitives::round_half_up;

/// Highest gradient index; the table holds `MAX_GRADIENT_INDEX + 1` entries.
pub const MAX_GRADIENT_INDEX: u8 = 100;

/// Result of mapping a pointer position onto the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerHit {
    /// Horizontal position as a 0..=100 color lookup, independent of sample density.
    pub gradient_index: u8,
    /// Sample shown by the tooltip.
    pub nearest_index: usize,
}

/// Maps a screen-space pointer onto gradient and sample indices.
///
/// `hit_bounds` is the screen rectangle of the pointer-capture region.
/// Returns `None` when fewer than two samples exist (no cell width), when the
/// region has no width, or when the pointer is not finite.
#[must_use]
pub fn track_pointer(
    screen_x: f64,
    screen_y: f64,
    hit_bounds: Rect,
    sample_count: usize,
) -> Option<PointerHit> {
    if sample_count < 2 || !screen_x.is_finite() || !screen_y.is_finite() {
        return None;
    }
    let relative_width = hit_bounds.width;
    if !relative_width.is_finite() || relative_width <= 0.0 || !hit_bounds.left.is_finite() {
        return None;
    }

    let relative_x = screen_x - hit_bounds.left;
    Some(PointerHit {
        gradient_index: gradient_index(relative_x, relative_width),
        nearest_index: nearest_sample_index(relative_x, relative_width, sample_count),
    })
}

/// `floor(relative_x / width * 100)` clamped to `0..=100`.
#[must_use]
pub fn gradient_index(relative_x: f64, relative_width: f64) -> u8 {
    let raw = ((relative_x / relative_width) * f64::from(MAX_GRADIENT_INDEX)).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= f64::from(MAX_GRADIENT_INDEX) {
        MAX_GRADIENT_INDEX
    } else {
        raw as u8
    }
}

/// Sample index under the pointer.
///
/// Cells are `width / (n - 1)` wide and the cell number is shifted by one
/// before clamping into `0..n`, so the pointer resolves to the sample on the
/// right edge of its cell.
#[must_use]
pub fn nearest_sample_index(relative_x: f64, relative_width: f64, sample_count: usize) -> usize {
    if sample_count < 2 {
        return 0;
    }
    let last = sample_count - 1;
    let cell_width = relative_width / last as f64;
    let raw = (round_half_up(relative_x) / cell_width).floor() + 1.0;

    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Current pointer interaction, present only while the pointer is captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Pointer in screen (client) coordinates.
    pub screen_x: f64,
    pub screen_y: f64,
    /// Pointer relative to the chart container.
    pub local_x: f64,
    pub local_y: f64,
    pub gradient_index: u8,
    pub nearest_index: usize,
}

impl PointerState {
    #[must_use]
    pub fn new(screen_x: f64, screen_y: f64, container: Rect, hit: PointerHit) -> Self {
        Self {
            screen_x,
            screen_y,
            local_x: screen_x - container.left,
            local_y: screen_y - container.top,
            gradient_index: hit.gradient_index,
            nearest_index: hit.nearest_index,
        }
    }

    #[must_use]
    pub fn hit(self) -> PointerHit {
        PointerHit {
            gradient_index: self.gradient_index,
            nearest_index: self.nearest_index,
        }
    }
}
