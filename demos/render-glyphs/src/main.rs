use std::{env, fs, path::PathBuf};

use anyhow::{anyhow, Result};
use glyphfx::{
    Color, FontDescriptor, FontStyle, FontdueRasterizer, GlyphsBuilderOptions, GlyphsRenderer,
};
use glyphfx_asset::loader::Loader;
use log::info;

// usage: render-glyphs <font.ttf> [out dir]
fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let font_path = args
        .next()
        .ok_or(anyhow!("usage: render-glyphs <font.ttf> [out dir]"))?;
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "glyphs".into()));

    let mut loader = Loader::new();
    loader.register_face("Demo", FontStyle::Normal.face_name(), &font_path)?;
    let renderer = GlyphsRenderer::new(FontdueRasterizer::from_loader(&loader)?);

    let characters = (' '..='~').collect::<String>();
    let options = GlyphsBuilderOptions::new(FontDescriptor::new("Demo", FontStyle::Normal, 32))
        .with_characters(&characters)
        .with_color(Color::WHITE)
        .with_drop_shadow(2, 2, Color::RGBA(0.0, 0.0, 0.0, 0.6))
        .with_glow(2, Color::RGBA(1.0, 0.8, 0.2, 0.5))
        .with_outline(1, Color::BLACK);

    let glyphs = renderer.render(&options)?;
    info!(
        "line height {}, descent {}, padding {}x{}",
        glyphs.line_height, glyphs.descent, glyphs.padding.x, glyphs.padding.y
    );

    fs::create_dir_all(&out_dir)?;
    let glyphs = glyphs.into_glyphs();
    for (index, glyph) in glyphs.iter().enumerate() {
        let path = out_dir.join(format!("{:03}_{:04x}.png", index, glyph.character as u32));
        glyph.image.save(&path)?;
    }
    info!("wrote {} glyphs to {}", glyphs.len(), out_dir.display());
    Ok(())
}
