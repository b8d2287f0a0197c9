use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::render::Renderer;

use super::Chart;

const X_AXIS_DATE_FORMAT: &str = "%-d %b";

/// One labelled axis tick in container-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position_px: f64,
    pub label: String,
}

impl<R: Renderer> Chart<R> {
    /// Horizontal-axis ticks labelled as calendar days.
    ///
    /// The last tick carries the anchor date and each earlier tick one day
    /// less, independent of the tick values.
    #[must_use]
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        let Some(scale) = self.geometry.x_scale else {
            return Vec::new();
        };
        let anchor = self
            .config
            .x_axis_anchor_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let values = scale.ticks(self.config.x_tick_count);
        let count = values.len();
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| AxisTick {
                value,
                position_px: scale.map(value),
                label: day_label(anchor, (count - 1 - index) as u64),
            })
            .collect()
    }

    /// Vertical-axis ticks labelled with fixed decimal precision.
    #[must_use]
    pub fn y_ticks(&self) -> Vec<AxisTick> {
        let Some(scale) = self.geometry.y_scale else {
            return Vec::new();
        };
        value_ticks(scale, self.config.y_tick_count, self.config.y_tick_label_precision)
    }
}

fn value_ticks(scale: LinearScale, count: usize, precision: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position_px: scale.map(value),
            label: format!("{value:.precision$}"),
        })
        .collect()
}

fn day_label(anchor: NaiveDate, days_back: u64) -> String {
    anchor
        .checked_sub_days(Days::new(days_back))
        .unwrap_or(NaiveDate::MIN)
        .format(X_AXIS_DATE_FORMAT)
        .to_string()
}
