use crate::core::{GradientTable, MAX_TICK_COUNT, Sample};
use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, CrosshairStyle};

const MAX_LABEL_PRECISION: usize = 12;

/// Validates config and builds the gradient table it describes.
pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<GradientTable> {
    config.margins.validate()?;
    config.style.validate()?;
    validate_crosshair_style(config.crosshair)?;

    for (name, precision) in [
        ("tooltip_value_precision", config.tooltip_value_precision),
        ("y_tick_label_precision", config.y_tick_label_precision),
    ] {
        if precision > MAX_LABEL_PRECISION {
            return Err(ChartError::InvalidConfiguration(format!(
                "`{name}` must be <= {MAX_LABEL_PRECISION}"
            )));
        }
    }

    for (name, count) in [
        ("x_tick_count", config.x_tick_count),
        ("y_tick_count", config.y_tick_count),
    ] {
        if count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidConfiguration(format!(
                "`{name}` must be <= {MAX_TICK_COUNT}"
            )));
        }
    }

    GradientTable::build(
        &config.gradient.start_color,
        &config.gradient.end_color,
        config.gradient.steps,
    )
}

fn validate_crosshair_style(style: CrosshairStyle) -> ChartResult<CrosshairStyle> {
    if !style.dot_radius_px.is_finite() || style.dot_radius_px <= 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "crosshair dot radius must be finite and > 0".to_owned(),
        ));
    }
    if !style.stroke_width_px.is_finite() || style.stroke_width_px <= 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "crosshair stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(style)
}

pub(super) fn validate_samples(samples: &[Sample]) -> ChartResult<()> {
    for (index, sample) in samples.iter().enumerate() {
        sample.validate().map_err(|err| {
            ChartError::InvalidData(format!("sample #{index} rejected: {err}"))
        })?;
    }
    Ok(())
}
