use anyhow::{Context, Result};

use crate::font::FontDescriptor;

use super::rasterizer::GlyphRasterizer;

/// Line metrics shared by every glyph of a render job.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FontMetrics {
    pub line_height: u32,
    pub descent: u32,
}

impl FontMetrics {
    /// Asks the rasterizer for the font's line metrics. Fails if the font can't be resolved.
    pub fn probe<R: GlyphRasterizer + ?Sized>(rasterizer: &R, font: &FontDescriptor) -> Result<Self> {
        let line_height = rasterizer
            .line_height(font)
            .with_context(|| format!("Couldn't get the line height of {}", font))?;
        let descent = rasterizer
            .descent(font)
            .with_context(|| format!("Couldn't get the descent of {}", font))?;

        Ok(Self {
            line_height,
            descent,
        })
    }

    /// Baseline row in an unpadded canvas.
    pub fn baseline_y(&self) -> i32 {
        self.line_height as i32 - self.descent as i32
    }
}
