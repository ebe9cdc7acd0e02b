//! Model a color with the HSL notation in the sRGB color space.

use crate::{Component, ParseError, Srgb};

/// A color specified with the HSL notation in the sRGB color space.
///
/// Hue is in degrees, saturation and lightness in percent. Converting from
/// hex always yields values rounded to the nearest integer; the tint remap
/// produces fractional ones, which [`Hsl::to_hex`] accepts as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The lightness component of the color.
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Parse a 6-digit hex color and convert it to the HSL notation.
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        s.parse::<Srgb>().map(|srgb| srgb.to_hsl())
    }

    /// Convert to a `#rrggbb` string with lowercase digits.
    pub fn to_hex(&self) -> String {
        self.to_srgb().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_hsl_color() {
        let hsl = Hsl::new(217.0, 91.0, 60.0);
        assert_eq!(hsl.hue, 217.0);
        assert_eq!(hsl.saturation, 91.0);
        assert_eq!(hsl.lightness, 60.0);
    }

    #[test]
    fn from_hex_reports_parse_failures() {
        assert_eq!(Hsl::from_hex("#80808"), Err(ParseError::InvalidLength));
        assert_eq!(Hsl::from_hex("gg8080"), Err(ParseError::InvalidDigit));
    }

    #[test]
    fn from_hex_to_hex() {
        let hsl = Hsl::from_hex("#808080").unwrap();
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 50.0));
        assert_eq!(hsl.to_hex(), "#808080");
    }
}
