//! This file implements HSL, the double-cone reshaping of sRGB used by CSS. Where HSB tops out at
//! the fully saturated color, HSL keeps going: lightness 0.5 is the pure hue and lightness 1 is
//! white no matter the hue or saturation. Saturation therefore says little about how colorful a
//! very light or very dark color actually looks.
//!
//! Gray converts to a hue of 0 degrees.

use serde_derive::{Deserialize, Serialize};

use crate::bound::{saturate, Bound};
use crate::color::{Color, RGBColor};
use crate::convert;

/// A color in the HSL color space. Hue ranges from 0 to 360 degrees and saturates at the ends
/// rather than wrapping; saturation and lightness range from 0 to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHSL")]
pub struct HSLColor {
    h: f64,
    s: f64,
    l: f64,
}

impl HSLColor {
    /// Builds an HSL color, saturating each component into range.
    pub fn new(h: f64, s: f64, l: f64) -> HSLColor {
        HSLColor {
            h: saturate(h, 0.0, 360.0),
            s: saturate(s, 0.0, 1.0),
            l: saturate(l, 0.0, 1.0),
        }
    }

    /// The hue, in degrees.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The saturation.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// The lightness.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Returns a copy with a new hue.
    pub fn with_h(self, h: f64) -> HSLColor {
        HSLColor::new(h, self.s, self.l)
    }

    /// Returns a copy with a new saturation.
    pub fn with_s(self, s: f64) -> HSLColor {
        HSLColor::new(self.h, s, self.l)
    }

    /// Returns a copy with a new lightness.
    pub fn with_l(self, l: f64) -> HSLColor {
        HSLColor::new(self.h, self.s, l)
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        convert::rgb::to_hsl(&rgb)
    }

    fn to_rgb(&self) -> RGBColor {
        convert::hsl::to_rgb(self)
    }
}

impl Bound for HSLColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0., 360.), (0., 1.), (0., 1.)]
    }

    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.l]
    }
}

#[derive(Deserialize)]
struct RawHSL {
    h: f64,
    s: f64,
    l: f64,
}

impl From<RawHSL> for HSLColor {
    fn from(raw: RawHSL) -> HSLColor {
        HSLColor::new(raw.h, raw.s, raw.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_clamping() {
        let hsl = HSLColor::new(-24.0, -0.2, 1.1);
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (0.0, 0.0, 1.0));
        let hsl = hsl.with_h(375.0).with_s(2.0).with_l(-1.0);
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (360.0, 1.0, 0.0));
        assert!(hsl.is_in_bounds());
    }

    #[test]
    fn test_hsl_equality() {
        let hsl1 = HSLColor::new(10.0, 0.2, 0.2);
        let hsl2 = HSLColor::new(10.0, 0.2, 0.2);
        let hsl3 = HSLColor::new(0.0, 0.3, 0.3);
        assert_eq!(hsl1, hsl2);
        assert_ne!(hsl1, hsl3);
        assert_ne!(hsl1, hsl1.with_l(0.21));
    }

    #[test]
    fn test_hsl_rgb_conversion() {
        let red_rgb = RGBColor::new(255, 0, 0);
        let red_hsl: HSLColor = red_rgb.convert();
        assert!(red_hsl.h().abs() <= 0.0001);
        assert!((red_hsl.s() - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l() - 0.5).abs() <= 0.0001);
        let lavender_hsl = HSLColor::new(245.0, 0.5, 0.6);
        let lavender_rgb: RGBColor = lavender_hsl.convert();
        assert_eq!(lavender_rgb.to_string(), "#6e66cc");
    }
}
