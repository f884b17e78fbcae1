//! Conversions from hex strings. A hex color is either `#rrggbb` or the shorthand `#rgb`, in which
//! each digit is doubled: `#fa0` is `#ffaa00`. Digits may be upper- or lowercase, but the `#` is
//! required and nothing else (such as an alpha channel or surrounding whitespace) is allowed.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::convert::rgb;
use crate::profiles::YuvProfile;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
        .expect("hex color pattern is valid");
}

/// The error returned when a string is not a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input was not of the form `#rgb` or `#rrggbb`.
    #[error("invalid hex color {input:?}: expected #rgb or #rrggbb")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },
}

fn invalid(hex: &str) -> ParseError {
    debug!(input = hex, "rejecting malformed hex color");
    ParseError::InvalidFormat {
        input: hex.to_string(),
    }
}

/// Gets RGB channels from a hex string.
///
/// # Errors
/// Returns [`ParseError::InvalidFormat`] if the string is not `#rgb` or `#rrggbb`.
///
/// # Example
/// ```
/// # use vermilion::convert::hex;
/// assert_eq!(hex::rgb_components("#fcba03"), Ok([252, 186, 3]));
/// assert_eq!(hex::rgb_components("#FFF"), Ok([255, 255, 255]));
/// assert!(hex::rgb_components("fcba03").is_err());
/// ```
pub fn rgb_components(hex: &str) -> Result<[u8; 3], ParseError> {
    if !HEX_COLOR.is_match(hex) {
        return Err(invalid(hex));
    }
    let digits = &hex[1..];
    let channel = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| invalid(hex));

    if digits.len() == 3 {
        let mut channels = [0u8; 3];
        for (i, nibble) in digits.chars().enumerate() {
            channels[i] = channel(&nibble.to_string().repeat(2))?;
        }
        Ok(channels)
    } else {
        Ok([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ])
    }
}

/// Converts a hex string to RGB.
pub fn to_rgb(hex: &str) -> Result<RGBColor, ParseError> {
    rgb_components(hex).map(RGBColor::from)
}

/// Converts a hex string to HSB.
pub fn to_hsb(hex: &str) -> Result<HSBColor, ParseError> {
    to_rgb(hex).map(|c| rgb::to_hsb(&c))
}

/// Converts a hex string to HSL.
pub fn to_hsl(hex: &str) -> Result<HSLColor, ParseError> {
    to_rgb(hex).map(|c| rgb::to_hsl(&c))
}

/// Converts a hex string to CMYK.
pub fn to_cmyk(hex: &str) -> Result<CMYKColor, ParseError> {
    to_rgb(hex).map(|c| rgb::to_cmyk(&c))
}

/// Converts a hex string to YUV with the given profile.
pub fn to_yuv(hex: &str, profile: YuvProfile) -> Result<YUVColor, ParseError> {
    to_rgb(hex).map(|c| rgb::to_yuv(&c, profile))
}

/// Converts a hex string to CIE XYZ relative to D65.
pub fn to_cie_xyz(hex: &str) -> Result<CIEXYZColor, ParseError> {
    to_rgb(hex).map(|c| rgb::to_cie_xyz(&c))
}
