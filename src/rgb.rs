//! Model a color in the sRGB color space.

use std::fmt;
use std::str::FromStr;

use crate::{hex, Component, Components, ParseError};

/// A color specified in the sRGB color space, with each channel normalized
/// to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    /// The red component of the color.
    pub red: Component,
    /// The green component of the color.
    pub green: Component,
    /// The blue component of the color.
    pub blue: Component,
}

impl Srgb {
    /// Create a new color with RGB (red, green, blue) components.
    pub fn new(red: Component, green: Component, blue: Component) -> Self {
        Self { red, green, blue }
    }
}

impl FromStr for Srgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [red, green, blue] = hex::parse(s)?;
        let Components(red, green, blue) = Components(
            Component::from(red),
            Component::from(green),
            Component::from(blue),
        )
        .map(|v| v / 255.0);
        Ok(Self { red, green, blue })
    }
}

impl TryFrom<&str> for Srgb {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Srgb {
    /// Format as `#` followed by 6 lowercase hex digits.
    ///
    /// Each channel is scaled to [0, 255] and rounded; the saturating
    /// float-to-int cast keeps the output well-formed even for channels
    /// outside [0, 1] or NaN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |v: Component| (v * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }
}
