// glyph side of the pipeline:
// - a rasterizer (font engine) measures and draws single characters
// - the compositor stacks effect layers under each glyph
// - the renderer runs that for every requested character

pub mod compositor;
pub mod fontdue_rasterizer;
pub mod glyphs_renderer;
pub mod headless;
pub mod metrics;
pub mod rasterizer;
