use nalgebra::Vector2;

use crate::color::Color;

/// A decoration rendered into its own layer underneath the glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// The glyph drawn at `offset` from its origin, then blurred.
    DropShadow { offset: Vector2<u32>, color: Color },
    /// Nine stamps of the glyph `size` pixels apart, then blurred.
    Glow { size: u32, color: Color },
    /// Nine stamps of the glyph `size` pixels apart, left sharp.
    Outline { size: u32, color: Color },
}

impl Effect {
    /// Position in the composite order, bottom first.
    pub fn layer(&self) -> usize {
        match self {
            Effect::DropShadow { .. } => 0,
            Effect::Glow { .. } => 1,
            Effect::Outline { .. } => 2,
        }
    }

    /// Extra canvas margin this effect needs on every side of the glyph.
    pub fn margin(&self) -> Vector2<u32> {
        match self {
            Effect::DropShadow { offset, .. } => *offset,
            Effect::Glow { size, .. } | Effect::Outline { size, .. } => Vector2::new(*size, *size),
        }
    }
}

const LAYER_COUNT: usize = 3;

/// The enabled effects, at most one of each kind.
///
/// Iteration always yields drop shadow, glow, outline, in that order, no matter
/// how the set was filled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectSet {
    layers: [Option<Effect>; LAYER_COUNT],
}

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables `effect`, replacing a previous effect of the same kind.
    pub fn insert(&mut self, effect: Effect) {
        self.layers[effect.layer()] = Some(effect);
    }

    pub fn with(mut self, effect: Effect) -> Self {
        self.insert(effect);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.layers.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl FromIterator<Effect> for EffectSet {
    fn from_iter<T: IntoIterator<Item = Effect>>(iter: T) -> Self {
        let mut set = EffectSet::new();
        for effect in iter {
            set.insert(effect);
        }
        set
    }
}
