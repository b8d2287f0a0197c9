use serde::{Deserialize, Serialize};

use crate::core::Domain;

/// Largest tick count a scale will honor; larger requests yield no ticks.
pub const MAX_TICK_COUNT: usize = 1_000;

const MAX_TICK_SPAN: f64 = 2.0 * MAX_TICK_COUNT as f64;

/// Linear mapping between a data domain and a pixel range.
///
/// Ranges may be inverted (`range_start > range_end`), which is how the
/// vertical axis places larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self {
            domain,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// A degenerate domain maps every value to the range midpoint.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.domain.is_degenerate() {
            return (self.range_start + self.range_end) / 2.0;
        }

        let normalized = (value - self.domain.min()) / self.domain.span();
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// Degenerate domains and zero-length ranges invert to the domain minimum.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if self.domain.is_degenerate() || range_span == 0.0 {
            return self.domain.min();
        }

        let normalized = (pixel - self.range_start) / range_span;
        self.domain.min() + normalized * self.domain.span()
    }

    /// Round-number ticks inside the domain.
    ///
    /// Increments follow the 1/2/5 x 10^k rule and target roughly `count`
    /// ticks. Output is ascending and free of duplicates. Requests above
    /// [`MAX_TICK_COUNT`] return no ticks.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.min(), self.domain.max(), count)
    }
}

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds plus increment.
///
/// A negative increment encodes `1 / -inc` so fractional steps stay exact
/// (`0.1` is stored as `-10`).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        inc = 10f64.powf(-power) / factor;
        i1 = (start * inc).round();
        i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        if i2 < i1 && (0.5..2.0).contains(&count) {
            return tick_spec(start, stop, count * 2.0);
        }
        return (i1, i2, -inc);
    }

    inc = 10f64.powf(power) * factor;
    i1 = (start / inc).round();
    i2 = (stop / inc).round();
    if i1 * inc < start {
        i1 += 1.0;
    }
    if i2 * inc > stop {
        i2 -= 1.0;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub(crate) fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || count > MAX_TICK_COUNT || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high) = if start < stop {
        (start, stop)
    } else {
        (stop, start)
    };
    let (i1, i2, inc) = tick_spec(low, high, count as f64);
    if !(i2 >= i1) || !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }
    // A nice step never yields much more than `count` ticks; anything wider
    // comes from precision loss at extreme magnitudes.
    let span = i2 - i1;
    if !span.is_finite() || span > MAX_TICK_SPAN {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks = Vec::with_capacity(n);
    for offset in 0..n {
        let index = i1 + offset as f64;
        let tick = if inc < 0.0 {
            index / -inc
        } else {
            index * inc
        };
        if ticks.last().is_none_or(|last: &f64| *last < tick) {
            ticks.push(tick);
        }
    }
    ticks
}
