use anyhow::Result;
use log::{debug, info, trace};

use crate::{
    layout::{effect_padding, GlyphLayout, Padding},
    options::GlyphsBuilderOptions,
    raster::Raster,
};

use super::{compositor::compose_glyph, metrics::FontMetrics, rasterizer::GlyphRasterizer};

/// One rendered character.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub character: char,
    pub image: Raster,
}

impl Glyph {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The output of a render job: one glyph per requested character, in request
/// order, plus the metrics needed to place them again once packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyphs {
    glyphs: Vec<Glyph>,
    pub font_size: u32,
    pub line_height: u32,
    pub descent: u32,
    pub padding: Padding,
}

impl Glyphs {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().map(|glyph| glyph.character)
    }

    /// Row of the baseline inside every glyph image.
    pub fn baseline_y(&self) -> i32 {
        self.line_height as i32 - self.descent as i32 + self.padding.y as i32
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }
}

impl<'a> IntoIterator for &'a Glyphs {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Turns [GlyphsBuilderOptions] into [Glyphs] using the given rasterizer.
#[derive(Debug)]
pub struct GlyphsRenderer<R: GlyphRasterizer> {
    rasterizer: R,
}

impl<R: GlyphRasterizer> GlyphsRenderer<R> {
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Renders every character of `options`. The first failure aborts the whole job.
    pub fn render(&self, options: &GlyphsBuilderOptions) -> Result<Glyphs> {
        let font = &options.font;
        let metrics = FontMetrics::probe(&self.rasterizer, font)?;
        let padding = effect_padding(&options.effects);

        let characters = options.characters.chars().collect::<Vec<_>>();
        info!("rendering {} glyph(s) of {}", characters.len(), font);
        debug!(
            "line height {}, descent {}, padding ({}, {})",
            metrics.line_height, metrics.descent, padding.x, padding.y
        );

        #[cfg(feature = "multithreading")]
        let glyphs = {
            use rayon::prelude::*;
            characters
                .par_iter()
                .map(|character| self.render_glyph(options, &metrics, &padding, *character))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "multithreading"))]
        let glyphs = characters
            .iter()
            .map(|character| self.render_glyph(options, &metrics, &padding, *character))
            .collect::<Result<Vec<_>>>()?;

        Ok(Glyphs {
            glyphs,
            font_size: font.size,
            line_height: metrics.line_height,
            descent: metrics.descent,
            padding,
        })
    }

    fn render_glyph(
        &self,
        options: &GlyphsBuilderOptions,
        metrics: &FontMetrics,
        padding: &Padding,
        character: char,
    ) -> Result<Glyph> {
        let bounds = self.rasterizer.measure(&options.font, character)?;
        let layout = GlyphLayout::new(padding, metrics, bounds.max_x())?;
        trace!("'{}' ink max x {}", character, bounds.max_x());

        let image = compose_glyph(
            &self.rasterizer,
            &options.font,
            character,
            &layout,
            &options.effects,
            options.color,
        )?;

        Ok(Glyph { character, image })
    }
}
