//! This module implements the CIE 1931 XYZ color space, relative to a reference white. XYZ is the
//! space that every other colorimetric space is ultimately defined against: Y is luminance, and X
//! and Z are chosen so that every visible color has nonnegative coordinates.
//!
//! Here XYZ is scaled so that the reference white has a Y of 1, and each axis is bounded by the
//! reference white itself: a color cannot be brighter along any axis than the light it is
//! measured under. The conversions to and from RGB assume D65, the white of sRGB. Picking another
//! white changes the bounds, not the conversion matrices.

use serde_derive::{Deserialize, Serialize};

use crate::bound::{saturate, Bound};
use crate::color::{Color, RGBColor};
use crate::convert;
use crate::illuminants::Illuminant;

/// A point in the CIE 1931 XYZ color space, along with the reference white that bounds it. Each
/// axis ranges from 0 to the matching component of the white point.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::CIEXYZColor;
/// let xyz = CIEXYZColor::new(10.0, -1.0, 0.5);
/// assert_eq!((xyz.x(), xyz.y(), xyz.z()), (0.9505, 0.0, 0.5));
///
/// let d50 = CIEXYZColor::with_illuminant(10.0, 10.0, 10.0, Illuminant::D50);
/// assert_eq!(d50.z(), 0.8252);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCIEXYZ")]
pub struct CIEXYZColor {
    x: f64,
    y: f64,
    z: f64,
    white_point: [f64; 3],
}

impl CIEXYZColor {
    /// The CIE D65 white point, the default reference white.
    pub const D65: [f64; 3] = [0.9505, 1.0, 1.089];

    /// Builds an XYZ color relative to D65, saturating each axis into `[0, white]`.
    pub fn new(x: f64, y: f64, z: f64) -> CIEXYZColor {
        CIEXYZColor::with_white_point(x, y, z, CIEXYZColor::D65)
    }

    /// Builds an XYZ color relative to the given white point. White point components that are not
    /// positive finite numbers become 0, which pins that axis to 0.
    pub fn with_white_point(x: f64, y: f64, z: f64, white_point: [f64; 3]) -> CIEXYZColor {
        let wp = white_point.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        CIEXYZColor {
            x: saturate(x, 0.0, wp[0]),
            y: saturate(y, 0.0, wp[1]),
            z: saturate(z, 0.0, wp[2]),
            white_point: wp,
        }
    }

    /// Builds an XYZ color relative to the white point of a standard illuminant.
    pub fn with_illuminant(x: f64, y: f64, z: f64, illuminant: Illuminant) -> CIEXYZColor {
        CIEXYZColor::with_white_point(x, y, z, illuminant.white_point())
    }

    /// The X axis.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The Y axis, or luminance.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The Z axis.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// The reference white bounding this color.
    pub fn white_point(&self) -> [f64; 3] {
        self.white_point
    }

    /// Returns a copy with a new X, saturated against this color's white point.
    pub fn with_x(self, x: f64) -> CIEXYZColor {
        CIEXYZColor::with_white_point(x, self.y, self.z, self.white_point)
    }

    /// Returns a copy with a new Y, saturated against this color's white point.
    pub fn with_y(self, y: f64) -> CIEXYZColor {
        CIEXYZColor::with_white_point(self.x, y, self.z, self.white_point)
    }

    /// Returns a copy with a new Z, saturated against this color's white point.
    pub fn with_z(self, z: f64) -> CIEXYZColor {
        CIEXYZColor::with_white_point(self.x, self.y, z, self.white_point)
    }
}

impl Color for CIEXYZColor {
    fn from_rgb(rgb: RGBColor) -> CIEXYZColor {
        convert::rgb::to_cie_xyz(&rgb)
    }

    fn to_rgb(&self) -> RGBColor {
        convert::ciexyz::to_rgb(self)
    }
}

impl Bound for CIEXYZColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        self.white_point.iter().map(|&w| (0., w)).collect()
    }

    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }
}

fn default_white_point() -> [f64; 3] {
    CIEXYZColor::D65
}

#[derive(Deserialize)]
struct RawCIEXYZ {
    x: f64,
    y: f64,
    z: f64,
    #[serde(default = "default_white_point")]
    white_point: [f64; 3],
}

impl From<RawCIEXYZ> for CIEXYZColor {
    fn from(raw: RawCIEXYZ) -> CIEXYZColor {
        CIEXYZColor::with_white_point(raw.x, raw.y, raw.z, raw.white_point)
    }
}
