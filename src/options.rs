use nalgebra::Vector2;

use crate::{
    color::Color,
    effects::{Effect, EffectSet},
    font::FontDescriptor,
};

/// Everything one render job needs: which font, which characters, and how to decorate them.
///
/// ```ignore
/// let options = GlyphsBuilderOptions::new(FontDescriptor::new("Roboto", FontStyle::Bold, 32))
///     .with_characters("abc")
///     .with_outline(2, Color::BLACK);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphsBuilderOptions {
    pub font: FontDescriptor,
    /// Rendered in order. Duplicates are rendered again, not shared.
    pub characters: String,
    pub color: Color,
    pub effects: EffectSet,
}

impl GlyphsBuilderOptions {
    pub fn new(font: FontDescriptor) -> Self {
        Self {
            font,
            characters: String::new(),
            color: Color::default(),
            effects: EffectSet::new(),
        }
    }

    pub fn with_characters(mut self, characters: &str) -> Self {
        self.characters = characters.to_string();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.insert(effect);
        self
    }

    pub fn with_drop_shadow(self, dx: u32, dy: u32, color: Color) -> Self {
        self.with_effect(Effect::DropShadow {
            offset: Vector2::new(dx, dy),
            color,
        })
    }

    pub fn with_outline(self, size: u32, color: Color) -> Self {
        self.with_effect(Effect::Outline { size, color })
    }

    pub fn with_glow(self, size: u32, color: Color) -> Self {
        self.with_effect(Effect::Glow { size, color })
    }
}
