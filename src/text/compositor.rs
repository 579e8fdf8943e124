use anyhow::Result;
use itertools::{iproduct, Itertools};
use log::trace;
use nalgebra::Vector2;

use crate::{
    blur::box_blur,
    color::Color,
    effects::{Effect, EffectSet},
    font::FontDescriptor,
    layout::GlyphLayout,
    raster::{composite_over, new_raster, Raster},
};

use super::rasterizer::GlyphRasterizer;

/// Offsets of the 3x3 stamp grid used by outlines and glows, column by column.
///
/// Stamps are `size` apart, so anything thicker than one pixel leaves gaps between
/// stamps instead of a solid ring. A zero size collapses to a single stamp.
pub fn stamp_offsets(size: i32) -> impl Iterator<Item = Vector2<i32>> {
    let steps = [-size, 0, size];
    iproduct!(steps, steps)
        .unique()
        .map(|(x, y)| Vector2::new(x, y))
}

/// Renders one glyph with its effects onto a fresh canvas.
///
/// Layers are composited bottom to top in [EffectSet] order (shadow, glow,
/// outline) and the glyph itself is always drawn last.
pub fn compose_glyph<R: GlyphRasterizer + ?Sized>(
    rasterizer: &R,
    font: &FontDescriptor,
    character: char,
    layout: &GlyphLayout,
    effects: &EffectSet,
    foreground: Color,
) -> Result<Raster> {
    let mut canvas = new_raster(layout.width(), layout.height());

    for effect in effects.iter() {
        let layer = render_layer(rasterizer, font, character, layout, effect)?;
        composite_over(&mut canvas, &layer);
    }

    rasterizer.draw_glyph(&mut canvas, font, character, layout.origin, foreground)?;
    trace!(
        "composed '{}' on a {}x{} canvas with {} effect layer(s)",
        character,
        layout.width(),
        layout.height(),
        effects.len()
    );

    Ok(canvas)
}

fn render_layer<R: GlyphRasterizer + ?Sized>(
    rasterizer: &R,
    font: &FontDescriptor,
    character: char,
    layout: &GlyphLayout,
    effect: &Effect,
) -> Result<Raster> {
    let mut layer = new_raster(layout.width(), layout.height());

    match *effect {
        Effect::DropShadow { offset, color } => {
            let offset = Vector2::new(i32::try_from(offset.x)?, i32::try_from(offset.y)?);
            let origin = layout.origin + offset;
            rasterizer.draw_glyph(&mut layer, font, character, origin, color)?;
            Ok(box_blur(&layer))
        }
        Effect::Glow { size, color } => {
            stamp(rasterizer, &mut layer, font, character, layout.origin, size, color)?;
            Ok(box_blur(&layer))
        }
        Effect::Outline { size, color } => {
            stamp(rasterizer, &mut layer, font, character, layout.origin, size, color)?;
            Ok(layer)
        }
    }
}

fn stamp<R: GlyphRasterizer + ?Sized>(
    rasterizer: &R,
    layer: &mut Raster,
    font: &FontDescriptor,
    character: char,
    origin: Vector2<i32>,
    size: u32,
    color: Color,
) -> Result<()> {
    for offset in stamp_offsets(i32::try_from(size)?) {
        rasterizer.draw_glyph(layer, font, character, origin + offset, color)?;
    }
    Ok(())
}
