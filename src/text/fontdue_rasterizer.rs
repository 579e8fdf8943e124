use std::collections::HashMap;

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings, LineMetrics};
use generational_arena::{Arena, Index};
use glyphfx_asset::loader::Loader;
use log::{debug, warn};
use nalgebra::Vector2;

use crate::{
    color::Color,
    font::{FontDescriptor, FontStyle},
    raster::{blend_coverage, Raster},
};

use super::rasterizer::{GlyphRasterizer, InkBounds};

const STYLES: [FontStyle; 4] = [
    FontStyle::Normal,
    FontStyle::Bold,
    FontStyle::Italic,
    FontStyle::BoldItalic,
];

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FontHandle(pub Index);

// one parsed font per registered face, sizes are chosen per call
#[derive(Default)]
pub struct FontdueRasterizer {
    fonts: Arena<Font>,
    faces: HashMap<(String, FontStyle), FontHandle>,
}

impl FontdueRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every face registered in `loader` whose style name matches a [FontStyle].
    pub fn from_loader(loader: &Loader) -> Result<Self> {
        let mut rasterizer = Self::new();
        for face in loader.faces() {
            let Some(style) = STYLES.iter().find(|style| style.face_name() == face.style) else {
                warn!(
                    "Skipping face '{}' ({}), unknown style name.",
                    face.family, face.style
                );
                continue;
            };
            let asset = loader.get_font_by_family(&face.family, &face.style)?;
            rasterizer.add_font(&face.family, *style, asset.bytes)?;
        }
        Ok(rasterizer)
    }

    pub fn add_font(&mut self, family: &str, style: FontStyle, bytes: Vec<u8>) -> Result<FontHandle> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|err| anyhow!(err))?;
        debug!("parsed {} {} with {} glyphs", family, style, font.chars().len());

        let handle = FontHandle(self.fonts.insert(font));
        if let Some(previous) = self.faces.insert((family.to_string(), style), handle) {
            self.fonts.remove(previous.0);
        }
        Ok(handle)
    }

    pub fn get_font(&self, font: &FontDescriptor) -> Result<&Font> {
        let handle = self
            .faces
            .get(&(font.family.clone(), font.style))
            .ok_or(anyhow!("Couldn't find font '{}'", font))?;
        self.fonts
            .get(handle.0)
            .ok_or(anyhow!("No font found at index {:?}.", handle))
    }

    fn line_metrics(&self, font: &FontDescriptor) -> Result<LineMetrics> {
        self.get_font(font)?
            .horizontal_line_metrics(font.px())
            .ok_or(anyhow!("Font '{}' has no horizontal line metrics", font))
    }
}

impl GlyphRasterizer for FontdueRasterizer {
    fn line_height(&self, font: &FontDescriptor) -> Result<u32> {
        Ok(self.line_metrics(font)?.new_line_size.ceil().max(0.0) as u32)
    }

    fn descent(&self, font: &FontDescriptor) -> Result<u32> {
        // fontdue reports descent as a negative offset from the baseline
        Ok((-self.line_metrics(font)?.descent).ceil().max(0.0) as u32)
    }

    fn measure(&self, font: &FontDescriptor, character: char) -> Result<InkBounds> {
        let bounds = self.get_font(font)?.metrics(character, font.px()).bounds;
        Ok(InkBounds {
            xmin: bounds.xmin,
            ymin: bounds.ymin,
            width: bounds.width,
            height: bounds.height,
        })
    }

    fn draw_glyph(
        &self,
        raster: &mut Raster,
        font: &FontDescriptor,
        character: char,
        origin: Vector2<i32>,
        color: Color,
    ) -> Result<()> {
        let (metrics, coverage) = self.get_font(font)?.rasterize(character, font.px());
        if metrics.width == 0 {
            return Ok(());
        }

        // the bitmap's bottom row sits `ymin` above the baseline
        let left = origin.x as i64 + metrics.xmin as i64;
        let top = origin.y as i64 - (metrics.ymin as i64 + metrics.height as i64);
        for (row, line) in coverage.chunks_exact(metrics.width).enumerate() {
            for (column, value) in line.iter().enumerate() {
                if *value == 0 {
                    continue;
                }
                blend_coverage(
                    raster,
                    left + column as i64,
                    top + row as i64,
                    color,
                    *value as f32 / 255.0,
                );
            }
        }
        Ok(())
    }
}
