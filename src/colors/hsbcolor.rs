//! This module implements HSB, also known as HSV. Brightness is the largest RGB channel, so pure
//! blue and white both have a brightness of 1 even though one reflects far less light. The model
//! says little about luminance, but its hue and saturation map directly onto the familiar color
//! picker square.
//!
//! Gray converts to a hue of 0 degrees.

use serde_derive::{Deserialize, Serialize};

use crate::bound::{saturate, Bound};
use crate::color::{Color, RGBColor};
use crate::convert;

/// An HSB color. Hue is an angle in degrees from 0 to 360, and saturation and brightness range
/// from 0 to 1. Hue saturates at the ends of its range rather than wrapping, so 400 degrees becomes
/// 360, not 40.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::HSBColor;
/// let lavender = HSBColor::new(243.5, 0.568, 0.925);
/// assert_eq!(lavender.to_hex(), "#6e66ec");
/// assert_eq!(HSBColor::new(400.0, 1.5, -1.0), HSBColor::new(360.0, 1.0, 0.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHSB")]
pub struct HSBColor {
    h: f64,
    s: f64,
    b: f64,
}

impl HSBColor {
    /// Builds an HSB color, saturating each component into range.
    pub fn new(h: f64, s: f64, b: f64) -> HSBColor {
        HSBColor {
            h: saturate(h, 0.0, 360.0),
            s: saturate(s, 0.0, 1.0),
            b: saturate(b, 0.0, 1.0),
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

    /// The brightness.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns a copy with a new hue.
    pub fn with_h(self, h: f64) -> HSBColor {
        HSBColor::new(h, self.s, self.b)
    }

    /// Returns a copy with a new saturation.
    pub fn with_s(self, s: f64) -> HSBColor {
        HSBColor::new(self.h, s, self.b)
    }

    /// Returns a copy with a new brightness.
    pub fn with_b(self, b: f64) -> HSBColor {
        HSBColor::new(self.h, self.s, b)
    }
}

impl Color for HSBColor {
    fn from_rgb(rgb: RGBColor) -> HSBColor {
        convert::rgb::to_hsb(&rgb)
    }

    fn to_rgb(&self) -> RGBColor {
        convert::hsb::to_rgb(self)
    }
}

impl Bound for HSBColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0., 360.), (0., 1.), (0., 1.)]
    }

    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.b]
    }
}

#[derive(Deserialize)]
struct RawHSB {
    h: f64,
    s: f64,
    b: f64,
}

impl From<RawHSB> for HSBColor {
    fn from(raw: RawHSB) -> HSBColor {
        HSBColor::new(raw.h, raw.s, raw.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_construction() {
        let hsb = HSBColor::new(120.0, 0.5, 0.25);
        assert_eq!(hsb.h(), 120.0);
        assert_eq!(hsb.s(), 0.5);
        assert_eq!(hsb.b(), 0.25);
    }

    #[test]
    fn test_hsb_clamping() {
        let hsb = HSBColor::new(0.0, 0.0, 0.0).with_h(-10.0).with_s(-0.1).with_b(-5.0);
        assert_eq!(hsb, HSBColor::new(0.0, 0.0, 0.0));
        let hsb = hsb.with_h(360.5).with_s(1.1).with_b(20.0);
        assert_eq!((hsb.h(), hsb.s(), hsb.b()), (360.0, 1.0, 1.0));
        assert!(hsb.is_in_bounds());
    }

    #[test]
    fn test_hsb_equality() {
        let hsb1 = HSBColor::new(200.0, 0.2, 0.2);
        let hsb2 = HSBColor::new(200.0, 0.2, 0.2);
        assert_eq!(hsb1, hsb2);
        assert_ne!(hsb1, hsb1.with_h(201.0));
        assert_ne!(hsb1, hsb1.with_s(0.3));
        assert_ne!(hsb1, hsb1.with_b(0.3));
    }

    #[test]
    fn test_hsb_rgb_conversion() {
        let red_rgb = RGBColor::new(255, 0, 0);
        let red_hsb: HSBColor = red_rgb.convert();
        assert!(red_hsb.h().abs() <= 0.0001);
        assert!((red_hsb.s() - 1.0).abs() <= 0.0001);
        assert!((red_hsb.b() - 1.0).abs() <= 0.0001);
        assert_eq!(red_hsb.convert::<RGBColor>(), red_rgb);
    }
}
