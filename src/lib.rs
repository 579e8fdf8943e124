pub mod blur;
pub mod color;
pub mod effects;
pub mod font;
pub mod layout;
pub mod options;
pub mod raster;
pub mod text;

pub use color::Color;
pub use effects::{Effect, EffectSet};
pub use font::{FontDescriptor, FontStyle};
pub use options::GlyphsBuilderOptions;
pub use text::{
    fontdue_rasterizer::FontdueRasterizer,
    glyphs_renderer::{Glyph, Glyphs, GlyphsRenderer},
    headless::HeadlessRasterizer,
    rasterizer::{GlyphRasterizer, InkBounds},
};
