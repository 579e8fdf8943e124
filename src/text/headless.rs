//! A rasterizer that needs no font files.
//!
//! Every glyph is a solid block sitting on the baseline, whitespace draws nothing,
//! and each draw is recorded so tests can see exactly where glyphs were stamped.

use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, Result};
use nalgebra::Vector2;

use crate::{
    color::Color,
    font::FontDescriptor,
    raster::{blend_coverage, Raster},
};

use super::rasterizer::{GlyphRasterizer, InkBounds};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub character: char,
    pub origin: Vector2<i32>,
    pub color: Color,
}

#[derive(Debug)]
pub struct HeadlessRasterizer {
    line_height: u32,
    descent: u32,
    ink_width: f32,
    ink_height: u32,
    family: Option<String>,
    missing: Vec<char>,
    draw_calls: Mutex<Vec<DrawCall>>,
}

impl HeadlessRasterizer {
    /// Blocks default to 8 pixels wide and as tall as the ascent.
    pub fn new(line_height: u32, descent: u32) -> Self {
        Self {
            line_height,
            descent,
            ink_width: 8.0,
            ink_height: line_height.saturating_sub(descent),
            family: None,
            missing: Vec::new(),
            draw_calls: Mutex::new(Vec::new()),
        }
    }

    /// Reported ink width. Blocks are drawn `ceil(width)` pixels wide.
    pub fn with_ink_width(mut self, width: f32) -> Self {
        self.ink_width = width;
        self
    }

    pub fn with_ink_height(mut self, height: u32) -> Self {
        self.ink_height = height;
        self
    }

    /// Only fonts of this family resolve; any other family is an error.
    pub fn with_family(mut self, family: &str) -> Self {
        self.family = Some(family.to_string());
        self
    }

    /// Measuring `character` fails, as if the font's glyph table were broken.
    pub fn with_missing_glyph(mut self, character: char) -> Self {
        self.missing.push(character);
        self
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.draw_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_draw_calls(&self) {
        self.draw_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn resolve(&self, font: &FontDescriptor) -> Result<()> {
        match &self.family {
            Some(family) if *family != font.family => {
                Err(anyhow!("Couldn't find font '{}'", font))
            }
            _ => Ok(()),
        }
    }

    fn has_ink(character: char) -> bool {
        !character.is_whitespace()
    }
}

impl GlyphRasterizer for HeadlessRasterizer {
    fn line_height(&self, font: &FontDescriptor) -> Result<u32> {
        self.resolve(font)?;
        Ok(self.line_height)
    }

    fn descent(&self, font: &FontDescriptor) -> Result<u32> {
        self.resolve(font)?;
        Ok(self.descent)
    }

    fn measure(&self, font: &FontDescriptor, character: char) -> Result<InkBounds> {
        self.resolve(font)?;
        if self.missing.contains(&character) {
            return Err(anyhow!(
                "Couldn't find metric for character '{}'",
                character
            ));
        }
        if !Self::has_ink(character) {
            return Ok(InkBounds::default());
        }

        Ok(InkBounds {
            xmin: 0.0,
            ymin: 0.0,
            width: self.ink_width,
            height: self.ink_height as f32,
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
        self.resolve(font)?;
        self.draw_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DrawCall {
                character,
                origin,
                color,
            });

        if !Self::has_ink(character) {
            return Ok(());
        }

        let width = self.ink_width.ceil().max(0.0) as i64;
        let height = self.ink_height as i64;
        let (left, baseline) = (origin.x as i64, origin.y as i64);
        for y in baseline - height..baseline {
            for x in left..left + width {
                blend_coverage(raster, x, y, color, 1.0);
            }
        }
        Ok(())
    }
}
