use image::{imageops, Pixel, Rgba, RgbaImage};

use crate::color::Color;

/// An 8-bit RGBA buffer with straight (non-premultiplied) alpha.
///
/// Canvases and effect layers are all rasters. Drawing and compositing mutate a
/// caller-owned raster in place; filters (see [crate::blur]) return a new one.
pub type Raster = RgbaImage;

/// A fully transparent raster.
pub fn new_raster(width: u32, height: u32) -> Raster {
    RgbaImage::new(width, height)
}

/// Alpha-composites `source` over `destination`, both anchored at (0, 0).
pub fn composite_over(destination: &mut Raster, source: &Raster) {
    debug_assert_eq!(
        destination.dimensions(),
        source.dimensions(),
        "layers are always allocated at canvas size"
    );
    imageops::overlay(destination, source, 0, 0);
}

/// Blends `color` into the pixel at (x, y) with its alpha scaled by `coverage` (0..=1).
/// Anything outside the raster is clipped.
pub fn blend_coverage(raster: &mut Raster, x: i64, y: i64, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= raster.width() as i64 || y >= raster.height() as i64 {
        return;
    }
    let alpha = (color.alpha() * coverage * 255.0).round().clamp(0.0, 255.0) as u8;
    if alpha == 0 {
        return;
    }
    let [r, g, b, _] = color.as_rgba_u8();
    raster
        .get_pixel_mut(x as u32, y as u32)
        .blend(&Rgba([r, g, b, alpha]));
}
