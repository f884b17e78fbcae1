//! Conversions from CMYK.

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::convert::{rgb, round_channel};
use crate::profiles::YuvProfile;

/// Gets RGB channels from cyan, magenta, yellow and black.
pub fn rgb_components(cyan: f64, magenta: f64, yellow: f64, black: f64) -> [u8; 3] {
    [
        round_channel((1.0 - cyan) * (1.0 - black) * 255.0),
        round_channel((1.0 - magenta) * (1.0 - black) * 255.0),
        round_channel((1.0 - yellow) * (1.0 - black) * 255.0),
    ]
}

/// Converts a CMYK color to RGB.
pub fn to_rgb(cmyk: &CMYKColor) -> RGBColor {
    RGBColor::from(rgb_components(cmyk.c(), cmyk.m(), cmyk.y(), cmyk.k()))
}

/// Converts a CMYK color to a hex string.
pub fn to_hex(cmyk: &CMYKColor) -> String {
    rgb::to_hex(&to_rgb(cmyk))
}

/// Converts a CMYK color to HSB.
pub fn to_hsb(cmyk: &CMYKColor) -> HSBColor {
    rgb::to_hsb(&to_rgb(cmyk))
}

/// Converts a CMYK color to HSL.
pub fn to_hsl(cmyk: &CMYKColor) -> HSLColor {
    rgb::to_hsl(&to_rgb(cmyk))
}

/// Converts a CMYK color to YUV with the given profile.
pub fn to_yuv(cmyk: &CMYKColor, profile: YuvProfile) -> YUVColor {
    rgb::to_yuv(&to_rgb(cmyk), profile)
}

/// Converts a CMYK color to CIE XYZ relative to D65.
pub fn to_cie_xyz(cmyk: &CMYKColor) -> CIEXYZColor {
    rgb::to_cie_xyz(&to_rgb(cmyk))
}
