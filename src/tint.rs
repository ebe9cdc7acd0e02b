//! Derive pale background tints from arbitrary hex colors.

use crate::{Component, Hsl, ParseError};

/// The tint returned by [`lighten_or_default`] when its input cannot be
/// parsed: a pale gray that sits in the same band as every other output.
pub const DEFAULT_TINT: &str = "#f9fafb";

// Tuned by eye against the Tailwind -100 shades; downstream styling depends
// on the exact values.
const LIGHTNESS_MIN: Component = 95.0;
const LIGHTNESS_MAX: Component = 98.0;
const LIGHTNESS_GAIN: Component = 0.1;
const SATURATION_MIN: Component = 5.0;
const SATURATION_MAX: Component = 15.0;
const SATURATION_SCALE: Component = 0.15;

/// Remap saturation and lightness into the pale band, leaving hue alone.
///
/// Originally darker colors land slightly higher in the lightness band. The
/// saturation floor applies to achromatic inputs too, so pure greys come
/// back with a faint cast of hue 0.
fn pale(from: Hsl) -> Hsl {
    let lightness = (LIGHTNESS_MIN + (100.0 - from.lightness) * LIGHTNESS_GAIN)
        .clamp(LIGHTNESS_MIN, LIGHTNESS_MAX);
    let saturation = (from.saturation * SATURATION_SCALE).clamp(SATURATION_MIN, SATURATION_MAX);
    Hsl::new(from.hue, saturation, lightness)
}

/// Convert a hex color to a very light, desaturated variant of itself,
/// suitable as a pale card background behind content in the same hue family.
pub fn lighten(hex: &str) -> Result<String, ParseError> {
    Hsl::from_hex(hex).map(|hsl| pale(hsl).to_hex())
}

/// Like [`lighten`], but a malformed input yields [`DEFAULT_TINT`] instead
/// of an error.
///
/// This entry point never fails, so styling code can call it in a render
/// path without a failure branch. Use [`lighten`] where malformed input
/// should surface instead of being painted over.
pub fn lighten_or_default(hex: &str) -> String {
    lighten(hex).unwrap_or_else(|_| DEFAULT_TINT.to_string())
}
