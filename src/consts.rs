//! This file provides the constants used for matrix multiplication and gamma encoding when moving
//! between sRGB and CIE XYZ. Both matrices are the rounded D65 values in common use: they are not
//! exact inverses of each other, which is why neither is computed from the other.

use nalgebra::Matrix3;

/// Linear values at or below this are encoded with the linear segment of the sRGB curve.
pub(crate) const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;

/// Encoded values at or below this are decoded with the linear segment of the sRGB curve.
pub(crate) const SRGB_ENCODED_THRESHOLD: f64 = 0.04045;

/// Slope of the linear segment.
pub(crate) const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Offset of the power segment.
pub(crate) const SRGB_OFFSET: f64 = 0.055;

/// Exponent of the power segment, used in both directions.
pub(crate) const SRGB_GAMMA: f64 = 2.4;

/// Builds a matrix from a row-major table, the layout every coefficient table in this crate uses.
pub(crate) fn matrix_from_rows(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2],
        rows[1][0], rows[1][1], rows[1][2],
        rows[2][0], rows[2][1], rows[2][2],
    )
}

/// Linear sRGB to CIE XYZ.
#[allow(non_snake_case)]
pub(crate) fn XYZ_TRANSFORM_MAT() -> Matrix3<f64> {
    matrix_from_rows(&[
        [0.4124, 0.3576, 0.1805],
        [0.2126, 0.7152, 0.0722],
        [0.0193, 0.1192, 0.9505],
    ])
}

/// CIE XYZ to linear sRGB.
#[allow(non_snake_case)]
pub(crate) fn STANDARD_RGB_TRANSFORM_MAT() -> Matrix3<f64> {
    matrix_from_rows(&[
        [3.2406, -1.5372, -0.4986],
        [-0.9689, 1.8758, 0.0415],
        [0.0557, -0.2040, 1.0570],
    ])
}
