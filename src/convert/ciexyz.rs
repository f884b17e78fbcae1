//! Conversions from CIE XYZ. The inverse sRGB matrix gives linear light, which is then gamma
//! encoded with the sRGB curve before being scaled to 8 bits.

use nalgebra::Vector3;

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::consts::{
    SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_LINEAR_THRESHOLD, SRGB_OFFSET, STANDARD_RGB_TRANSFORM_MAT,
};
use crate::convert::{rgb, round_channel};
use crate::profiles::YuvProfile;

/// Gets RGB channels from X, Y and Z (D65).
pub fn rgb_components(x: f64, y: f64, z: f64) -> [u8; 3] {
    let linear = STANDARD_RGB_TRANSFORM_MAT() * Vector3::new(x, y, z);
    let gamma = |c: f64| {
        if c <= SRGB_LINEAR_THRESHOLD {
            SRGB_LINEAR_SLOPE * c
        } else {
            (1.0 + SRGB_OFFSET) * c.powf(1.0 / SRGB_GAMMA) - SRGB_OFFSET
        }
    };
    [
        round_channel(gamma(linear[0]) * 255.0),
        round_channel(gamma(linear[1]) * 255.0),
        round_channel(gamma(linear[2]) * 255.0),
    ]
}

/// Converts an XYZ color to RGB.
pub fn to_rgb(xyz: &CIEXYZColor) -> RGBColor {
    RGBColor::from(rgb_components(xyz.x(), xyz.y(), xyz.z()))
}

/// Converts an XYZ color to a hex string.
pub fn to_hex(xyz: &CIEXYZColor) -> String {
    rgb::to_hex(&to_rgb(xyz))
}

/// Converts an XYZ color to HSB.
pub fn to_hsb(xyz: &CIEXYZColor) -> HSBColor {
    rgb::to_hsb(&to_rgb(xyz))
}

/// Converts an XYZ color to HSL.
pub fn to_hsl(xyz: &CIEXYZColor) -> HSLColor {
    rgb::to_hsl(&to_rgb(xyz))
}

/// Converts an XYZ color to CMYK.
pub fn to_cmyk(xyz: &CIEXYZColor) -> CMYKColor {
    rgb::to_cmyk(&to_rgb(xyz))
}

/// Converts an XYZ color to YUV with the given profile.
pub fn to_yuv(xyz: &CIEXYZColor, profile: YuvProfile) -> YUVColor {
    rgb::to_yuv(&to_rgb(xyz), profile)
}
