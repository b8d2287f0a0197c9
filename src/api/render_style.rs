use serde::{Deserialize, Serialize};

use crate::core::RgbColor;
use crate::error::{ChartError, ChartResult};

/// Visual styling consumed by the render frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Opaque fill under the curve; also masks the crosshair below the line.
    pub background_fill_color: RgbColor,
    pub grid_line_color: RgbColor,
    pub grid_line_alpha: f64,
    pub grid_line_width_px: f64,
    /// How far vertical grid lines run below the plot bottom.
    pub x_grid_line_overhang_px: f64,
    /// How far horizontal grid lines run past the plot right edge.
    pub y_grid_line_overhang_px: f64,
    pub axis_label_color: RgbColor,
    pub axis_label_font_size_px: f64,
    /// Distance of x-axis labels above the container bottom.
    pub x_axis_label_offset_px: f64,
    pub series_line_width_px: f64,
    pub gradient_fill_opacity: f64,
    pub tooltip_background_color: RgbColor,
    pub tooltip_border_color: RgbColor,
    pub tooltip_text_color: RgbColor,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_x_px: f64,
    pub tooltip_padding_y_px: f64,
    pub tooltip_corner_radius_px: f64,
    /// Downward arrow under the tooltip box, pointing at the cursor.
    pub tooltip_arrow_width_px: f64,
    pub tooltip_arrow_height_px: f64,
    pub tooltip_arrow_color: RgbColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_fill_color: RgbColor::new(0x1b, 0x1b, 0x1b),
            grid_line_color: RgbColor::new(0xff, 0xff, 0xff),
            grid_line_alpha: 0.05,
            grid_line_width_px: 1.0,
            x_grid_line_overhang_px: 8.0,
            y_grid_line_overhang_px: 6.0,
            axis_label_color: RgbColor::new(0xc3, 0xc3, 0xc3),
            axis_label_font_size_px: 8.0,
            x_axis_label_offset_px: 22.0,
            series_line_width_px: 2.0,
            gradient_fill_opacity: 0.2,
            tooltip_background_color: RgbColor::new(0x52, 0x52, 0x52),
            tooltip_border_color: RgbColor::new(0x39, 0xb0, 0x4a),
            tooltip_text_color: RgbColor::new(0xff, 0xff, 0xff),
            tooltip_font_size_px: 14.0,
            tooltip_padding_x_px: 12.0,
            tooltip_padding_y_px: 8.0,
            tooltip_corner_radius_px: 8.0,
            tooltip_arrow_width_px: 8.0,
            tooltip_arrow_height_px: 5.0,
            tooltip_arrow_color: RgbColor::new(0x39, 0xb0, 0x4a),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("grid_line_alpha", self.grid_line_alpha),
            ("gradient_fill_opacity", self.gradient_fill_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfiguration(format!(
                    "style `{name}` must be finite and in [0, 1]"
                )));
            }
        }

        for (name, value) in [
            ("grid_line_width_px", self.grid_line_width_px),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("series_line_width_px", self.series_line_width_px),
            ("tooltip_font_size_px", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("x_grid_line_overhang_px", self.x_grid_line_overhang_px),
            ("y_grid_line_overhang_px", self.y_grid_line_overhang_px),
            ("x_axis_label_offset_px", self.x_axis_label_offset_px),
            ("tooltip_padding_x_px", self.tooltip_padding_x_px),
            ("tooltip_padding_y_px", self.tooltip_padding_y_px),
            ("tooltip_corner_radius_px", self.tooltip_corner_radius_px),
            ("tooltip_arrow_width_px", self.tooltip_arrow_width_px),
            ("tooltip_arrow_height_px", self.tooltip_arrow_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }
}
