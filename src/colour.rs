use rand::Rng;

use crate::math::Vec4;

/// Exclusive upper bound for randomly drawn channels, 255 itself is never produced.
pub const CHANNEL_MAX: u8 = 255;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Colour {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Colour {
    /// Black
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    /// White
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw each channel independently and uniformly from `[0, 255)`
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.gen_range(0..CHANNEL_MAX),
            g: rng.gen_range(0..CHANNEL_MAX),
            b: rng.gen_range(0..CHANNEL_MAX),
        }
    }

    /// Normalized `(r, g, b, 1.0)`, the form `set_colour` style APIs take
    pub fn to_vec4(self) -> Vec4 {
        let c = |v: u8| v as f32 / 255.0;
        Vec4::new(c(self.r), c(self.g), c(self.b), 1.0)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Colour> for Vec4 {
    fn from(colour: Colour) -> Self {
        colour.to_vec4()
    }
}
