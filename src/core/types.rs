use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Integer pixel size of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One measured value of the series.
///
/// `x` is an ordinal (index or timestamp) and `y` the measured value. Series
/// order is the time axis order and is never rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    /// Builds `(index, value)` samples from a plain value list.
    #[must_use]
    pub fn series_from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| Self::new(index as f64, *value))
            .collect()
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "sample must be finite, got ({}, {})",
                self.x, self.y
            )));
        }
        Ok(())
    }
}
