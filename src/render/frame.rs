use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives of one layer, drawn as paths, lines, circles, rects, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            paths: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }

    fn validate(&self) -> ChartResult<()> {
        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers always follow [`CanvasLayerKind::canonical_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::canonical_order()
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let position = self.layers.iter().position(|layer| layer.kind == kind);
        match position {
            Some(index) => &mut self.layers[index],
            None => {
                self.layers.push(LayerPrimitives::new(kind));
                let last = self.layers.len() - 1;
                &mut self.layers[last]
            }
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    #[must_use]
    pub fn count<T>(&self, select: impl Fn(&LayerPrimitives) -> &[T]) -> usize {
        self.layers.iter().map(|layer| select(layer).len()).sum()
    }
}
