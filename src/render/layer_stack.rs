use serde::{Deserialize, Serialize};

/// Draw layers of one chart frame, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Guide line and indicator dot; the background fill masks the part below the curve.
    Crosshair,
    /// Opaque area under the curve.
    Background,
    Grid,
    /// Gradient stroke and translucent gradient fill.
    Series,
    /// Tooltip box.
    Overlay,
}

impl CanvasLayerKind {
    #[must_use]
    pub const fn canonical_order() -> [Self; 5] {
        [
            Self::Crosshair,
            Self::Background,
            Self::Grid,
            Self::Series,
            Self::Overlay,
        ]
    }
}
