//! Conversions from YUV. Decoding always uses the profile carried by the color, so a BT.601 value
//! goes through the BT.601 inverse matrix and offset even when it is converted to HSL or CMYK.

use nalgebra::Vector3;

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::convert::{rgb, round_channel};
use crate::profiles::YuvProfile;

/// Gets RGB channels from Y, U and V by adding the profile's offset and applying its inverse
/// matrix.
pub fn rgb_components(y: f64, u: f64, v: f64, profile: &YuvProfile) -> [u8; 3] {
    let rgb = profile.rgb_transform() * (Vector3::new(y, u, v) + profile.offset_vector());
    [
        round_channel(rgb[0] * 255.0),
        round_channel(rgb[1] * 255.0),
        round_channel(rgb[2] * 255.0),
    ]
}

/// Converts a YUV color to RGB.
pub fn to_rgb(yuv: &YUVColor) -> RGBColor {
    RGBColor::from(rgb_components(yuv.y(), yuv.u(), yuv.v(), &yuv.profile()))
}

/// Converts a YUV color to a hex string.
pub fn to_hex(yuv: &YUVColor) -> String {
    rgb::to_hex(&to_rgb(yuv))
}

/// Converts a YUV color to HSB.
pub fn to_hsb(yuv: &YUVColor) -> HSBColor {
    rgb::to_hsb(&to_rgb(yuv))
}

/// Converts a YUV color to HSL.
pub fn to_hsl(yuv: &YUVColor) -> HSLColor {
    rgb::to_hsl(&to_rgb(yuv))
}

/// Converts a YUV color to CMYK.
pub fn to_cmyk(yuv: &YUVColor) -> CMYKColor {
    rgb::to_cmyk(&to_rgb(yuv))
}

/// Re-encodes a YUV color with another profile.
pub fn to_profile(yuv: &YUVColor, profile: YuvProfile) -> YUVColor {
    rgb::to_yuv(&to_rgb(yuv), profile)
}

/// Converts a YUV color to CIE XYZ relative to D65.
pub fn to_cie_xyz(yuv: &YUVColor) -> CIEXYZColor {
    rgb::to_cie_xyz(&to_rgb(yuv))
}
