use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{GRADIENT_STEPS, Margins};
use crate::error::{ChartError, ChartResult};

use super::ChartStyle;

/// Endpoints of the horizontal color gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub start_color: String,
    pub end_color: String,
    #[serde(default = "default_gradient_steps")]
    pub steps: usize,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start_color: "#FFF961".to_owned(),
            end_color: "#34D399".to_owned(),
            steps: GRADIENT_STEPS,
        }
    }
}

/// Size of the pointer indicator dot and guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairStyle {
    pub dot_radius_px: f64,
    pub stroke_width_px: f64,
}

impl Default for CrosshairStyle {
    fn default() -> Self {
        Self {
            dot_radius_px: 4.0,
            stroke_width_px: 2.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist and load chart setup as JSON.
/// Curve smoothing is fixed and not part of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub gradient: GradientConfig,
    #[serde(default = "default_x_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_tooltip_value_precision")]
    pub tooltip_value_precision: usize,
    #[serde(default = "default_y_tick_label_precision")]
    pub y_tick_label_precision: usize,
    /// Date of the last x tick; earlier ticks count back one day each.
    /// Falls back to the current UTC date.
    #[serde(default)]
    pub x_axis_anchor_date: Option<NaiveDate>,
    #[serde(default)]
    pub crosshair: CrosshairStyle,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            gradient: GradientConfig::default(),
            x_tick_count: default_x_tick_count(),
            y_tick_count: default_y_tick_count(),
            tooltip_value_precision: default_tooltip_value_precision(),
            y_tick_label_precision: default_y_tick_label_precision(),
            x_axis_anchor_date: None,
            crosshair: CrosshairStyle::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets gradient endpoints; colors are validated when the chart is built.
    #[must_use]
    pub fn with_gradient(mut self, start_color: impl Into<String>, end_color: impl Into<String>) -> Self {
        self.gradient.start_color = start_color.into();
        self.gradient.end_color = end_color.into();
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_tooltip_value_precision(mut self, precision: usize) -> Self {
        self.tooltip_value_precision = precision;
        self
    }

    #[must_use]
    pub fn with_y_tick_label_precision(mut self, precision: usize) -> Self {
        self.y_tick_label_precision = precision;
        self
    }

    #[must_use]
    pub fn with_x_axis_anchor_date(mut self, date: NaiveDate) -> Self {
        self.x_axis_anchor_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_crosshair_style(mut self, crosshair: CrosshairStyle) -> Self {
        self.crosshair = crosshair;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfiguration(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfiguration(format!("failed to parse config: {e}")))
    }
}

fn default_gradient_steps() -> usize {
    GRADIENT_STEPS
}

fn default_x_tick_count() -> usize {
    10
}

fn default_y_tick_count() -> usize {
    8
}

fn default_tooltip_value_precision() -> usize {
    3
}

fn default_y_tick_label_precision() -> usize {
    8
}
