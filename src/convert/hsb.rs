//! Conversions from HSB. The hue picks one of six sectors of the RGB hexagon, and the position
//! inside that sector decides how the falling and rising channels are mixed.

use crate::color::RGBColor;
use crate::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use crate::convert::{rgb, round_channel};
use crate::profiles::YuvProfile;

/// Gets RGB channels from hue, saturation and brightness.
pub fn rgb_components(hue: f64, saturation: f64, brightness: f64) -> [u8; 3] {
    if saturation == 0.0 {
        // gray
        let v = round_channel(brightness * 255.0);
        return [v, v, v];
    }

    let sector_pos = hue / 60.0;
    let sector_floor = sector_pos.floor();
    let fraction = sector_pos - sector_floor;
    // 360 degrees lands on sector 6, which is sector 0 again
    let sector = (sector_floor as i64).rem_euclid(6);

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * fraction);
    let t = brightness * (1.0 - saturation * (1.0 - fraction));

    let (r, g, b) = match sector {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    [
        round_channel(r * 255.0),
        round_channel(g * 255.0),
        round_channel(b * 255.0),
    ]
}

/// Converts an HSB color to RGB.
pub fn to_rgb(hsb: &HSBColor) -> RGBColor {
    RGBColor::from(rgb_components(hsb.h(), hsb.s(), hsb.b()))
}

/// Converts an HSB color to a hex string.
pub fn to_hex(hsb: &HSBColor) -> String {
    rgb::to_hex(&to_rgb(hsb))
}

/// Converts an HSB color to HSL.
pub fn to_hsl(hsb: &HSBColor) -> HSLColor {
    rgb::to_hsl(&to_rgb(hsb))
}

/// Converts an HSB color to CMYK.
pub fn to_cmyk(hsb: &HSBColor) -> CMYKColor {
    rgb::to_cmyk(&to_rgb(hsb))
}

/// Converts an HSB color to YUV with the given profile.
pub fn to_yuv(hsb: &HSBColor, profile: YuvProfile) -> YUVColor {
    rgb::to_yuv(&to_rgb(hsb), profile)
}

/// Converts an HSB color to CIE XYZ relative to D65.
pub fn to_cie_xyz(hsb: &HSBColor) -> CIEXYZColor {
    rgb::to_cie_xyz(&to_rgb(hsb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray() {
        assert_eq!(rgb_components(200.0, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(rgb_components(0.0, 0.0, 0.0), [0, 0, 0]);
        assert_eq!(rgb_components(0.0, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn test_every_sector() {
        assert_eq!(rgb_components(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(rgb_components(60.0, 1.0, 1.0), [255, 255, 0]);
        assert_eq!(rgb_components(120.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(rgb_components(180.0, 1.0, 1.0), [0, 255, 255]);
        assert_eq!(rgb_components(240.0, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(rgb_components(300.0, 1.0, 1.0), [255, 0, 255]);
        assert_eq!(rgb_components(360.0, 1.0, 1.0), [255, 0, 0]);
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(rgb_components(243.5, 0.568, 0.925), [110, 102, 236]);
        let gold = HSBColor::new(44.096385542168676, 0.9880952380952381, 0.9882352941176471);
        assert_eq!(to_rgb(&gold), RGBColor::new(252, 186, 3));
        assert_eq!(to_hex(&gold), "#fcba03");
    }

    #[test]
    fn test_pivot_conversions() {
        let hsb = HSBColor::new(120.0, 1.0, 1.0);
        assert_eq!(to_hsl(&hsb), HSLColor::new(120.0, 1.0, 0.5));
        assert_eq!(to_cmyk(&hsb), CMYKColor::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(to_yuv(&hsb, YuvProfile::BT_601).profile(), YuvProfile::BT_601);
        assert!((to_cie_xyz(&hsb).y() - 0.7152).abs() <= 1e-9);
    }
}
