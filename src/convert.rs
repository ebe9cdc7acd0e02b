//! Conversions between the sRGB color space and the HSL notation.
//!
//! The two directions use two genuinely different standard algorithms: the
//! forward direction picks a sector by which channel holds the maximum,
//! while the reverse uses a closed-form per-channel formula. Their rounding
//! at sector boundaries is not identical, so neither is expressed in terms
//! of the other.

use crate::{Components, Hsl, Srgb};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL
    /// notation.
    ///
    /// Hue is scaled to degrees, saturation and lightness to percent, and
    /// all three are rounded to the nearest integer.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&Components(self.red, self.green, self.blue));
        Hsl::new(
            hue.round(),
            (saturation * 100.0).round(),
            (lightness * 100.0).round(),
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness));
        Srgb::new(red, green, blue)
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Convert from RGB notation to HSL notation. Channels are normalized
    /// [0, 1] on input; the result carries hue in degrees with saturation
    /// and lightness still in [0, 1].
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            // Achromatic; hue is undefined and pinned to 0.
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Sectors are checked in red, green, blue order so that a tie for
        // the maximum always resolves to the earliest channel. A hue a hair
        // under 360 still rounds to 360 in the caller; the reverse
        // conversion folds it back onto 0.
        let hue = if max == red {
            ((green - blue) / delta + if green < blue { 6.0 } else { 0.0 }) / 6.0
        } else if max == green {
            ((blue - red) / delta + 2.0) / 6.0
        } else {
            ((red - green) / delta + 4.0) / 6.0
        };

        Components(hue * 360.0, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation. Hue is in degrees and is
    /// not range-checked; saturation and lightness are percentages.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let lightness = lightness / 100.0;
        let a = saturation * lightness.min(1.0 - lightness) / 100.0;

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }
}
