//! 3x3 box blur used to soften drop shadows and glows.

use image::Rgba;

use crate::raster::Raster;

/// Width and height of the kernel. Every tap has weight `1 / (KERNEL_SIZE * KERNEL_SIZE)`.
pub const KERNEL_SIZE: u32 = 3;
const KERNEL_RADIUS: u32 = KERNEL_SIZE / 2;
const KERNEL_TAPS: f32 = (KERNEL_SIZE * KERNEL_SIZE) as f32;

/// Returns a blurred copy of `source`.
///
/// Each output pixel is the uniform average of its 3x3 neighbourhood. Pixels whose
/// neighbourhood would leave the raster (the one pixel border) are copied through
/// unchanged. Colour is averaged premultiplied, so fully transparent neighbours
/// don't darken the result.
pub fn box_blur(source: &Raster) -> Raster {
    let mut blurred = source.clone();
    let (width, height) = source.dimensions();
    if width < KERNEL_SIZE || height < KERNEL_SIZE {
        return blurred;
    }

    for y in KERNEL_RADIUS..height - KERNEL_RADIUS {
        for x in KERNEL_RADIUS..width - KERNEL_RADIUS {
            blurred.put_pixel(x, y, average_neighbourhood(source, x, y));
        }
    }

    blurred
}

fn average_neighbourhood(source: &Raster, x: u32, y: u32) -> Rgba<u8> {
    // colour sums are premultiplied by the 0..=255 alpha
    let mut premultiplied = [0u32; 3];
    let mut alpha = 0u32;
    for ny in y - KERNEL_RADIUS..=y + KERNEL_RADIUS {
        for nx in x - KERNEL_RADIUS..=x + KERNEL_RADIUS {
            let [r, g, b, a] = source.get_pixel(nx, ny).0;
            let a = a as u32;
            premultiplied[0] += r as u32 * a;
            premultiplied[1] += g as u32 * a;
            premultiplied[2] += b as u32 * a;
            alpha += a;
        }
    }

    if alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let unpremultiply = |sum: u32| (sum as f32 / alpha as f32).round() as u8;
    Rgba([
        unpremultiply(premultiplied[0]),
        unpremultiply(premultiplied[1]),
        unpremultiply(premultiplied[2]),
        (alpha as f32 / KERNEL_TAPS).round() as u8,
    ])
}
