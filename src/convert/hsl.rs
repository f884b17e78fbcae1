//! Conversions from HSL.

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::convert::{rgb, round_channel};
use crate::profiles::YuvProfile;

/// Gets RGB channels from hue, saturation and lightness.
pub fn rgb_components(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    if saturation == 0.0 {
        // gray
        let v = round_channel(lightness * 255.0);
        return [v, v, v];
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    // each channel samples the same piecewise curve a third of a turn apart
    let h = hue / 360.0;
    let channel = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        let value = if t * 6.0 < 1.0 {
            p + (q - p) * 6.0 * t
        } else if t * 2.0 < 1.0 {
            q
        } else if t * 3.0 < 2.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        round_channel(value * 255.0)
    };

    [
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    ]
}

/// Converts an HSL color to RGB.
pub fn to_rgb(hsl: &HSLColor) -> RGBColor {
    RGBColor::from(rgb_components(hsl.h(), hsl.s(), hsl.l()))
}

/// Converts an HSL color to a hex string.
pub fn to_hex(hsl: &HSLColor) -> String {
    rgb::to_hex(&to_rgb(hsl))
}

/// Converts an HSL color to HSB.
pub fn to_hsb(hsl: &HSLColor) -> HSBColor {
    rgb::to_hsb(&to_rgb(hsl))
}

/// Converts an HSL color to CMYK.
pub fn to_cmyk(hsl: &HSLColor) -> CMYKColor {
    rgb::to_cmyk(&to_rgb(hsl))
}

/// Converts an HSL color to YUV with the given profile.
pub fn to_yuv(hsl: &HSLColor, profile: YuvProfile) -> YUVColor {
    rgb::to_yuv(&to_rgb(hsl), profile)
}

/// Converts an HSL color to CIE XYZ relative to D65.
pub fn to_cie_xyz(hsl: &HSLColor) -> CIEXYZColor {
    rgb::to_cie_xyz(&to_rgb(hsl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray() {
        assert_eq!(rgb_components(0.0, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(rgb_components(75.0, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_components(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(rgb_components(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(rgb_components(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(rgb_components(360.0, 1.0, 0.5), [255, 0, 0]);
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(rgb_components(245.0, 0.5, 0.6), [110, 102, 204]);
        assert_eq!(rgb_components(44.1, 0.98, 0.5), [252, 186, 3]);
        assert_eq!(to_hex(&HSLColor::new(120.0, 1.0, 0.25)), "#008000");
    }

    #[test]
    fn test_pivot_conversions() {
        let hsl = HSLColor::new(240.0, 1.0, 0.5);
        assert_eq!(to_hsb(&hsl), HSBColor::new(240.0, 1.0, 1.0));
        assert_eq!(to_cmyk(&hsl), CMYKColor::new(1.0, 1.0, 0.0, 0.0));
        assert_eq!(to_yuv(&hsl, YuvProfile::BT_470).y(), 0.114);
        assert!((to_cie_xyz(&hsl).z() - 0.9505).abs() <= 1e-9);
    }
}
