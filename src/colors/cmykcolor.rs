//! A module that implements CMYK, the subtractive model of four-color printing. This is the naive
//! device-independent form: cyan, magenta and yellow are the complements of red, green and blue
//! with the shared darkness pulled out into black. No ink limits or press profiles are involved.

use serde_derive::{Deserialize, Serialize};

use crate::bound::{saturate, Bound};
use crate::color::{Color, RGBColor};
use crate::convert;

/// A CMYK color. All four components range between 0 and 1.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::CMYKColor;
/// let black: CMYKColor = RGBColor::new(0, 0, 0).convert();
/// assert_eq!(black, CMYKColor::new(0.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCMYK")]
pub struct CMYKColor {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl CMYKColor {
    /// Builds a CMYK color, saturating each component into `[0, 1]`.
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> CMYKColor {
        CMYKColor {
            c: saturate(c, 0.0, 1.0),
            m: saturate(m, 0.0, 1.0),
            y: saturate(y, 0.0, 1.0),
            k: saturate(k, 0.0, 1.0),
        }
    }

    /// The cyan component.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The magenta component.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// The yellow component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The black component.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Returns a copy with a new cyan component.
    pub fn with_c(self, c: f64) -> CMYKColor {
        CMYKColor::new(c, self.m, self.y, self.k)
    }

    /// Returns a copy with a new magenta component.
    pub fn with_m(self, m: f64) -> CMYKColor {
        CMYKColor::new(self.c, m, self.y, self.k)
    }

    /// Returns a copy with a new yellow component.
    pub fn with_y(self, y: f64) -> CMYKColor {
        CMYKColor::new(self.c, self.m, y, self.k)
    }

    /// Returns a copy with a new black component.
    pub fn with_k(self, k: f64) -> CMYKColor {
        CMYKColor::new(self.c, self.m, self.y, k)
    }
}

impl Color for CMYKColor {
    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        convert::rgb::to_cmyk(&rgb)
    }

    fn to_rgb(&self) -> RGBColor {
        convert::cmyk::to_rgb(self)
    }
}

impl Bound for CMYKColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0., 1.); 4]
    }

    fn components(&self) -> Vec<f64> {
        vec![self.c, self.m, self.y, self.k]
    }
}

#[derive(Deserialize)]
struct RawCMYK {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl From<RawCMYK> for CMYKColor {
    fn from(raw: RawCMYK) -> CMYKColor {
        CMYKColor::new(raw.c, raw.m, raw.y, raw.k)
    }
}
