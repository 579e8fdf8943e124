use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// The face name fonts are registered under in the asset loader.
    pub fn face_name(&self) -> &'static str {
        match self {
            FontStyle::Normal => "Regular",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::BoldItalic => "BoldItalic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.face_name())
    }
}

/// Which font to render with. Built once per render job and never mutated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub style: FontStyle,
    /// Point size. One point is one pixel.
    pub size: u32,
}

impl FontDescriptor {
    pub fn new(family: &str, style: FontStyle, size: u32) -> Self {
        Self {
            family: family.to_string(),
            style,
            size,
        }
    }

    pub fn px(&self) -> f32 {
        self.size as f32
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}pt", self.family, self.style, self.size)
    }
}
