use anyhow::{anyhow, Result};
use nalgebra::Vector2;

use crate::{
    effects::{Effect, EffectSet},
    text::metrics::FontMetrics,
};

/// Margin added on each side of every glyph canvas in a render job.
pub type Padding = Vector2<u32>;

/// The component-wise maximum of the margins of all enabled effects, or zero.
pub fn effect_padding(effects: &EffectSet) -> Padding {
    effects
        .iter()
        .map(Effect::margin)
        .fold(Padding::zeros(), |acc, margin| acc.zip_map(&margin, u32::max))
}

/// Where one glyph goes on its canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphLayout {
    /// (width, height) of the canvas.
    pub canvas_size: Vector2<u32>,
    /// Pen position on the baseline at which the glyph and every effect layer are drawn.
    pub origin: Vector2<i32>,
}

impl GlyphLayout {
    /// Fails if the padded canvas doesn't fit in `i32` pixel coordinates.
    pub fn new(padding: &Padding, metrics: &FontMetrics, ink_max_x: f32) -> Result<Self> {
        // whitespace has no ink, it still gets the padded margins
        let ink_width = ink_max_x.ceil().max(0.0) as u32;
        let padded = |extent: u32, margin: u32| {
            margin
                .checked_mul(2)
                .and_then(|margins| margins.checked_add(extent))
                .filter(|size| i32::try_from(*size).is_ok())
                .ok_or(anyhow!(
                    "Canvas of {} px with {} px margins is too large",
                    extent,
                    margin
                ))
        };
        let canvas_size = Vector2::new(
            padded(ink_width, padding.x)?,
            padded(metrics.line_height, padding.y)?,
        );
        // both fit in i32 once the canvas does
        let origin = Vector2::new(
            padding.x as i32,
            metrics.baseline_y() + padding.y as i32,
        );

        Ok(Self {
            canvas_size,
            origin,
        })
    }

    pub fn width(&self) -> u32 {
        self.canvas_size.x
    }

    pub fn height(&self) -> u32 {
        self.canvas_size.y
    }
}
