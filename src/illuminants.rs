//! This module provides an enum of the reference whites supported by Vermilion, as well as a table
//! of white point values for them. Unlike many tables, these are normalized so that the Y
//! (luminance) value is 1, which is the scale every CIE XYZ color in this crate uses. The D65 row
//! is the four-digit value used by the sRGB matrices in this crate.

use serde_derive::{Deserialize, Serialize};

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. The most common ones for computers are D50 and D65, differing kinds of
/// daylight. D65 is the default everywhere in this crate, because it is the white of sRGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon light, the usual reference for print.
    D50,
    /// Mid-morning or mid-afternoon daylight.
    D55,
    /// Noon daylight, and the white point of sRGB.
    D65,
    /// North sky daylight.
    D75,
    /// Represents a light of any given hue, as an array [X, Y, Z] in CIE 1931 space.
    Custom([f64; 3]),
}

/// An array of illuminants, in the same order as the table below.
pub static ILLUMINANTS: [Illuminant; 4] = [
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
];

/// A table of white point values for the named illuminants. The order of the rows is the order of
/// the Illuminant enum definition. Each white point is an array of 3 `f64` values X, Y, and Z,
/// normalized so that Y is 1.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 4] = [
    [0.9642, 1.0000, 0.8252],
    [0.9568, 1.0000, 0.9213],
    [0.9505, 1.0000, 1.0890],
    [0.9497, 1.0000, 1.2264],
];

impl Default for Illuminant {
    fn default() -> Illuminant {
        Illuminant::D65
    }
}

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant. Custom illuminants are
    /// rescaled so that Y is 1, unless their Y is not positive, in which case they are returned
    /// as given.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[3],
            Illuminant::Custom(xyz) if xyz[1] > 0.0 => [xyz[0] / xyz[1], 1.0, xyz[2] / xyz[1]],
            Illuminant::Custom(xyz) => xyz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_is_default() {
        assert_eq!(Illuminant::default(), Illuminant::D65);
        assert_eq!(Illuminant::D65.white_point(), [0.9505, 1.0, 1.089]);
    }

    #[test]
    fn test_named_white_points_have_unit_luminance() {
        for illuminant in ILLUMINANTS.iter() {
            assert_eq!(illuminant.white_point()[1], 1.0);
        }
    }

    #[test]
    fn test_custom_white_point_normalization() {
        let wp = Illuminant::Custom([95.047, 100.0, 108.883]).white_point();
        assert!((wp[0] - 0.95047).abs() <= 1e-12);
        assert_eq!(wp[1], 1.0);
        assert!((wp[2] - 1.08883).abs() <= 1e-12);
        assert_eq!(Illuminant::Custom([0.3, 0.0, 0.2]).white_point(), [0.3, 0.0, 0.2]);
    }
}
