/// A colour with four channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    RGBA(f32, f32, f32, f32),
}

fn f32_to_u8_color(x: f32) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Color {
    pub const WHITE: Color = Color::RGBA(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::RGBA(0.0, 0.0, 0.0, 1.0);

    pub fn as_rgba_u8(&self) -> [u8; 4] {
        match self {
            Color::RGBA(r, g, b, a) => [
                f32_to_u8_color(*r),
                f32_to_u8_color(*g),
                f32_to_u8_color(*b),
                f32_to_u8_color(*a),
            ],
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Color::RGBA(_, _, _, a) => *a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
