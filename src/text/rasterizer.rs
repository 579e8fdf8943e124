use anyhow::Result;
use nalgebra::Vector2;

use crate::{color::Color, font::FontDescriptor, raster::Raster};

/// Tight bounds of a glyph's ink relative to its pen position, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InkBounds {
    pub xmin: f32,
    pub ymin: f32,
    pub width: f32,
    pub height: f32,
}

impl InkBounds {
    pub fn max_x(&self) -> f32 {
        self.xmin + self.width
    }
}

/// Font metrics and glyph drawing, provided by a font engine.
///
/// Any error returned here aborts the whole render job. Implementations are
/// shared between workers when rendering in parallel, hence `Sync`.
pub trait GlyphRasterizer: Sync {
    /// Distance between consecutive baselines, in whole pixels.
    fn line_height(&self, font: &FontDescriptor) -> Result<u32>;

    /// Distance from the baseline to the bottom of the line, in whole pixels.
    fn descent(&self, font: &FontDescriptor) -> Result<u32>;

    fn measure(&self, font: &FontDescriptor, character: char) -> Result<InkBounds>;

    /// Draws the filled glyph with its pen position at `origin` (baseline, y down),
    /// blending `color` over whatever `raster` already holds.
    fn draw_glyph(
        &self,
        raster: &mut Raster,
        font: &FontDescriptor,
        character: char,
        origin: Vector2<i32>,
        color: Color,
    ) -> Result<()>;
}
