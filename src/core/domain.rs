use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Extent of data values along one axis.
///
/// `min == max` is a valid, degenerate domain (constant series).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "domain min must be <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// Extent of an arbitrary value sequence.
    ///
    /// Returns `None` for an empty sequence or when any value is non-finite.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut extent: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in values {
            if !value.is_finite() {
                return None;
            }
            let value = OrderedFloat(value);
            extent = Some(match extent {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        extent.map(|(min, max)| Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    #[must_use]
    pub fn from_x(samples: &[Sample]) -> Option<Self> {
        Self::from_values(samples.iter().map(|sample| sample.x))
    }

    #[must_use]
    pub fn from_y(samples: &[Sample]) -> Option<Self> {
        Self::from_values(samples.iter().map(|sample| sample.y))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }
}
