//! Conversions from RGB. These are the only formulas in the crate that compute a model directly:
//! every other source model converts to RGB and then calls into this module.

use nalgebra::Vector3;

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::consts::{
    SRGB_ENCODED_THRESHOLD, SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_OFFSET, XYZ_TRANSFORM_MAT,
};
use crate::profiles::YuvProfile;

fn normalize(red: u8, green: u8, blue: u8) -> (f64, f64, f64) {
    (
        f64::from(red) / 255.0,
        f64::from(green) / 255.0,
        f64::from(blue) / 255.0,
    )
}

/// The hexagonal hue shared by HSB and HSL, in degrees. Gray has no hue, so it gets 0.
fn hue(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    if max == min {
        0.0
    } else if max == r && g >= b {
        60.0 * (g - b) / (max - min)
    } else if max == r {
        60.0 * (g - b) / (max - min) + 360.0
    } else if max == g {
        60.0 * (b - r) / (max - min) + 120.0
    } else {
        60.0 * (r - g) / (max - min) + 240.0
    }
}

/// Formats three channels as `#rrggbb` with lowercase digits.
pub fn hex_string(red: u8, green: u8, blue: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", red, green, blue)
}

/// Gets hue, saturation and brightness from RGB channels.
pub fn hsb_components(red: u8, green: u8, blue: u8) -> [f64; 3] {
    let (r, g, b) = normalize(red, green, blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let s = if max == 0.0 { 0.0 } else { 1.0 - min / max };
    [hue(r, g, b, max, min), s, max]
}

/// Gets hue, saturation and lightness from RGB channels.
pub fn hsl_components(red: u8, green: u8, blue: u8) -> [f64; 3] {
    let (r, g, b) = normalize(red, green, blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = (max + min) / 2.0;
    let s = if l == 0.0 || max == min {
        0.0
    } else if l <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - (max + min))
    };
    [hue(r, g, b, max, min), s, l]
}

/// Gets cyan, magenta, yellow and black from RGB channels. Pure black is (0, 0, 0, 1).
pub fn cmyk_components(red: u8, green: u8, blue: u8) -> [f64; 4] {
    let c = (255.0 - f64::from(red)) / 255.0;
    let m = (255.0 - f64::from(green)) / 255.0;
    let y = (255.0 - f64::from(blue)) / 255.0;

    let k = c.min(m).min(y);
    if k == 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [(c - k) / (1.0 - k), (m - k) / (1.0 - k), (y - k) / (1.0 - k), k]
}

/// Gets Y, U and V from RGB channels using the forward matrix of `profile`.
pub fn yuv_components(red: u8, green: u8, blue: u8, profile: &YuvProfile) -> [f64; 3] {
    let (r, g, b) = normalize(red, green, blue);
    let yuv = profile.yuv_transform() * Vector3::new(r, g, b);
    [yuv[0], yuv[1], yuv[2]]
}

/// Gets CIE XYZ (D65) from RGB channels by undoing the sRGB gamma curve and applying the sRGB
/// primaries.
pub fn cie_xyz_components(red: u8, green: u8, blue: u8) -> [f64; 3] {
    let (r, g, b) = normalize(red, green, blue);
    let ungamma = |c: f64| {
        if c > SRGB_ENCODED_THRESHOLD {
            ((c + SRGB_OFFSET) / (1.0 + SRGB_OFFSET)).powf(SRGB_GAMMA)
        } else {
            c / SRGB_LINEAR_SLOPE
        }
    };
    let xyz = XYZ_TRANSFORM_MAT() * Vector3::new(ungamma(r), ungamma(g), ungamma(b));
    [xyz[0], xyz[1], xyz[2]]
}

/// Converts an RGB color to a hex string.
pub fn to_hex(rgb: &RGBColor) -> String {
    hex_string(rgb.r(), rgb.g(), rgb.b())
}

/// Converts an RGB color to HSB.
pub fn to_hsb(rgb: &RGBColor) -> HSBColor {
    let [h, s, b] = hsb_components(rgb.r(), rgb.g(), rgb.b());
    HSBColor::new(h, s, b)
}

/// Converts an RGB color to HSL.
pub fn to_hsl(rgb: &RGBColor) -> HSLColor {
    let [h, s, l] = hsl_components(rgb.r(), rgb.g(), rgb.b());
    HSLColor::new(h, s, l)
}

/// Converts an RGB color to CMYK.
pub fn to_cmyk(rgb: &RGBColor) -> CMYKColor {
    let [c, m, y, k] = cmyk_components(rgb.r(), rgb.g(), rgb.b());
    CMYKColor::new(c, m, y, k)
}

/// Converts an RGB color to YUV with the given profile.
pub fn to_yuv(rgb: &RGBColor, profile: YuvProfile) -> YUVColor {
    let [y, u, v] = yuv_components(rgb.r(), rgb.g(), rgb.b(), &profile);
    YUVColor::with_profile(y, u, v, profile)
}

/// Converts an RGB color to CIE XYZ relative to D65.
pub fn to_cie_xyz(rgb: &RGBColor) -> CIEXYZColor {
    let [x, y, z] = cie_xyz_components(rgb.r(), rgb.g(), rgb.b());
    CIEXYZColor::new(x, y, z)
}
