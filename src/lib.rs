//! Vermilion is a small library for moving colors between the models people actually type into
//! software: RGB, HSB (also called HSV), HSL, CMYK, CIE XYZ, YUV and hex strings. Every color is a
//! tiny immutable value that keeps its components in range by saturating them, so there is no such
//! thing as an invalid color once it has been built: only a color that was pushed to its limits.
//!
//! Conversions between any two models go through RGB, the one space every other model here is
//! defined against. The [`Color`] trait makes that pivot implicit:
//!
//! ```
//! use vermilion::prelude::*;
//! use vermilion::colors::{CMYKColor, HSBColor};
//!
//! let gold: RGBColor = "#fcba03".parse().unwrap();
//! let hsb: HSBColor = gold.convert();
//! let cmyk: CMYKColor = hsb.convert();
//! assert_eq!(cmyk.convert::<RGBColor>(), gold);
//! ```
//!
//! The [`convert`] module exposes the same conversions as plain functions grouped by source model,
//! including the raw-component helpers the typed functions are built on.
//!
//! [`Color`]: color/trait.Color.html
//! [`convert`]: convert/index.html

#![warn(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

pub mod bound;
pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod illuminants;
pub mod prelude;
pub mod profiles;

pub use crate::color::{Color, RGBColor};
pub use crate::convert::hex::ParseError;
pub use crate::convert::round_channel;
pub use crate::profiles::YuvProfile;
