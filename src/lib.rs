//! palewash converts 6-digit hex colors to and from the HSL notation and
//! derives very light, desaturated background tints from them.

#![deny(missing_docs)]

mod color;
mod convert;
mod hex;
mod hsl;
mod rgb;
#[cfg(test)]
mod test;
mod tint;

pub use color::{Component, Components};
pub use hex::ParseError;
pub use hsl::Hsl;
pub use rgb::Srgb;
pub use tint::{lighten, lighten_or_default, DEFAULT_TINT};
