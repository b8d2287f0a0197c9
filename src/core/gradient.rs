use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Number of gradient entries addressed by indices `0..=100`.
pub const GRADIENT_STEPS: usize = 101;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RRGGBB`, `RRGGBB` or `#RGB`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid_color(input, "expected hexadecimal digits"));
        }

        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16)
                    .map_err(|_| invalid_color(input, "expected hexadecimal digits"))?;
                Ok(Self::new(
                    ((value >> 16) & 0xff) as u8,
                    ((value >> 8) & 0xff) as u8,
                    (value & 0xff) as u8,
                ))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch
                        .to_digit(16)
                        .ok_or_else(|| invalid_color(input, "expected hexadecimal digits"))?
                        as u8;
                    *slot = nibble * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(invalid_color(input, "expected 3 or 6 hex digits")),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Normalized render color with the given opacity.
    #[must_use]
    pub fn to_color(self, alpha: f64) -> Color {
        Color::rgba(
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            alpha,
        )
    }
}

impl FromStr for RgbColor {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

fn invalid_color(input: &str, reason: &'static str) -> ChartError {
    ChartError::InvalidColor {
        input: input.to_owned(),
        reason,
    }
}

/// Precomputed per-channel linear interpolation between two colors.
///
/// Built once per endpoint pair and looked up by gradient index on every
/// pointer move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientTable {
    colors: Vec<RgbColor>,
}

impl GradientTable {
    /// Builds the default 101-entry table from two hex colors.
    pub fn from_hex(start: &str, end: &str) -> ChartResult<Self> {
        Self::build(start, end, GRADIENT_STEPS)
    }

    pub fn build(start: &str, end: &str, steps: usize) -> ChartResult<Self> {
        let start = RgbColor::from_hex(start)?;
        let end = RgbColor::from_hex(end)?;
        Self::between(start, end, steps)
    }

    pub fn between(start: RgbColor, end: RgbColor, steps: usize) -> ChartResult<Self> {
        if steps < 2 {
            return Err(ChartError::InvalidConfiguration(format!(
                "gradient needs at least 2 steps, got {steps}"
            )));
        }

        let last = (steps - 1) as f64;
        let colors = (0..steps)
            .map(|index| {
                let percent = index as f64 / last;
                RgbColor::new(
                    interpolate_channel(start.red, end.red, percent),
                    interpolate_channel(start.green, end.green, percent),
                    interpolate_channel(start.blue, end.blue, percent),
                )
            })
            .collect();
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    #[must_use]
    pub fn start(&self) -> RgbColor {
        self.color_at(0)
    }

    #[must_use]
    pub fn end(&self) -> RgbColor {
        self.color_at(usize::MAX)
    }

    /// Color at `index`, clamped into the table.
    #[must_use]
    pub fn color_at(&self, index: usize) -> RgbColor {
        let last = self.colors.len().saturating_sub(1);
        self.colors
            .get(index.min(last))
            .copied()
            .unwrap_or(RgbColor::new(0, 0, 0))
    }
}

fn interpolate_channel(start: u8, end: u8, percent: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + percent * (end - start)).round().clamp(0.0, 255.0) as u8
}
