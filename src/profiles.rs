//! This module defines the coefficient sets that tie YUV to RGB. YUV is not one color model but a
//! family: every broadcast standard picks its own luma weights and its own chroma scaling, so a
//! YUV triple means nothing without the profile it was made with. Three standard profiles are
//! provided, and a custom one can be built from the same four pieces.
//!
//! More information: [Y′UV](https://en.wikipedia.org/wiki/Y%E2%80%B2UV) and
//! [ITU-R BT.601](https://www.itu.int/rec/R-REC-BT.601).

use nalgebra::{Matrix3, Vector3};
use serde_derive::{Deserialize, Serialize};

use crate::consts::matrix_from_rows;

/// An immutable set of YUV coefficients: the largest magnitude U and V may take, the row-major
/// matrix from normalized RGB to YUV, the row-major matrix back to RGB, and an offset added to Y, U
/// and V before the inverse matrix is applied.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// assert_eq!(YuvProfile::BT_601.u_max(), 0.5);
/// assert_eq!(YuvProfile::BT_470.v_min(), -0.615);
/// assert_eq!(YuvProfile::default(), YuvProfile::BT_470);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawYuvProfile")]
pub struct YuvProfile {
    u_max: f64,
    v_max: f64,
    yuv_matrix: [[f64; 3]; 3],
    rgb_matrix: [[f64; 3]; 3],
    offset: [f64; 3],
}

impl YuvProfile {
    /// The analog PAL profile of ITU-R BT.470, and the default everywhere in this crate.
    pub const BT_470: YuvProfile = YuvProfile {
        u_max: 0.436,
        v_max: 0.615,
        yuv_matrix: [
            [0.299, 0.587, 0.114],
            [-0.14713, -0.28886, 0.436],
            [0.615, -0.51499, -0.10001],
        ],
        rgb_matrix: [
            [1.0, 0.0, 1.13983],
            [1.0, -0.39465, -0.5806],
            [1.0, 2.03211, 0.0],
        ],
        offset: [0.0, 0.0, 0.0],
    };

    /// The digital ITU-R BT.601 profile. Its inverse expects studio-range values, with luma
    /// starting at 16/255 and chroma centered on 0.5, which the offset undoes.
    pub const BT_601: YuvProfile = YuvProfile {
        u_max: 0.5,
        v_max: 0.5,
        yuv_matrix: [
            [0.299, 0.587, 0.114],
            [-0.168736, -0.331264, 0.5],
            [0.5, -0.418688, -0.081312],
        ],
        rgb_matrix: [
            [1.1643, 0.0, 1.596],
            [1.1643, -0.39176, -0.81296],
            [1.1643, 2.01723, 0.0],
        ],
        offset: [-0.0627, -0.5, -0.5],
    };

    /// The full-range ITU-R BT.709 (HDTV) profile.
    pub const BT_709: YuvProfile = YuvProfile {
        u_max: 0.436,
        v_max: 0.615,
        yuv_matrix: [
            [0.2126, 0.7152, 0.0722],
            [-0.09991, -0.33609, 0.436],
            [0.615, -0.55861, -0.05639],
        ],
        rgb_matrix: [
            [1.0, 0.0, 1.28033],
            [1.0, -0.21482, -0.38059],
            [1.0, 2.12798, 0.0],
        ],
        offset: [0.0, 0.0, 0.0],
    };

    /// Builds a custom profile. The maximum U and V are magnitudes: their sign is ignored, and a
    /// maximum that is not finite becomes 0, pinning that axis to 0.
    pub fn new(
        u_max: f64,
        v_max: f64,
        yuv_matrix: [[f64; 3]; 3],
        rgb_matrix: [[f64; 3]; 3],
        offset: [f64; 3],
    ) -> YuvProfile {
        YuvProfile {
            u_max: chroma_limit(u_max),
            v_max: chroma_limit(v_max),
            yuv_matrix,
            rgb_matrix,
            offset,
        }
    }

    /// The smallest U a color with this profile may have.
    pub fn u_min(&self) -> f64 {
        -self.u_max
    }

    /// The largest U a color with this profile may have.
    pub fn u_max(&self) -> f64 {
        self.u_max
    }

    /// The smallest V a color with this profile may have.
    pub fn v_min(&self) -> f64 {
        -self.v_max
    }

    /// The largest V a color with this profile may have.
    pub fn v_max(&self) -> f64 {
        self.v_max
    }

    /// The row-major matrix from normalized RGB to YUV.
    pub fn yuv_matrix(&self) -> [[f64; 3]; 3] {
        self.yuv_matrix
    }

    /// The row-major matrix from offset YUV to normalized RGB.
    pub fn rgb_matrix(&self) -> [[f64; 3]; 3] {
        self.rgb_matrix
    }

    /// The offset added to (Y, U, V) before [`YuvProfile::rgb_matrix`] is applied.
    pub fn offset(&self) -> [f64; 3] {
        self.offset
    }

    pub(crate) fn yuv_transform(&self) -> Matrix3<f64> {
        matrix_from_rows(&self.yuv_matrix)
    }

    pub(crate) fn rgb_transform(&self) -> Matrix3<f64> {
        matrix_from_rows(&self.rgb_matrix)
    }

    pub(crate) fn offset_vector(&self) -> Vector3<f64> {
        Vector3::from(self.offset)
    }
}

fn chroma_limit(max: f64) -> f64 {
    if max.is_finite() {
        max.abs()
    } else {
        0.0
    }
}

impl Default for YuvProfile {
    fn default() -> YuvProfile {
        YuvProfile::BT_470
    }
}

// serde goes through this so that deserialized limits are cleaned like those given to `new`
#[derive(Deserialize)]
struct RawYuvProfile {
    u_max: f64,
    v_max: f64,
    yuv_matrix: [[f64; 3]; 3],
    rgb_matrix: [[f64; 3]; 3],
    offset: [f64; 3],
}

impl From<RawYuvProfile> for YuvProfile {
    fn from(raw: RawYuvProfile) -> YuvProfile {
        YuvProfile::new(raw.u_max, raw.v_max, raw.yuv_matrix, raw.rgb_matrix, raw.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::colors::YUVColor;

    #[test]
    fn test_chroma_ranges() {
        assert_eq!(YuvProfile::BT_470.u_min(), -0.436);
        assert_eq!(YuvProfile::BT_470.u_max(), 0.436);
        assert_eq!(YuvProfile::BT_470.v_max(), 0.615);
        assert_eq!(YuvProfile::BT_601.u_min(), -0.5);
        assert_eq!(YuvProfile::BT_601.v_min(), -0.5);
        assert_eq!(YuvProfile::BT_709.v_min(), -0.615);
    }

    #[test]
    fn test_only_bt601_has_an_offset() {
        assert_eq!(YuvProfile::BT_470.offset(), [0.0; 3]);
        assert_eq!(YuvProfile::BT_709.offset(), [0.0; 3]);
        assert_eq!(YuvProfile::BT_601.offset(), [-0.0627, -0.5, -0.5]);
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        for profile in [YuvProfile::BT_470, YuvProfile::BT_601, YuvProfile::BT_709].iter() {
            let sum: f64 = profile.yuv_matrix()[0].iter().sum();
            assert!((sum - 1.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_custom_profile_takes_magnitudes() {
        let profile = YuvProfile::new(
            -0.4,
            0.6,
            YuvProfile::BT_470.yuv_matrix(),
            YuvProfile::BT_470.rgb_matrix(),
            [0.0; 3],
        );
        assert_eq!(profile.u_min(), -0.4);
        assert_eq!(profile.u_max(), 0.4);
        assert_eq!(profile.v_max(), 0.6);
    }

    #[test]
    fn test_custom_profile_rejects_non_finite_limits() {
        let profile = YuvProfile::new(
            f64::NAN,
            f64::INFINITY,
            YuvProfile::BT_470.yuv_matrix(),
            YuvProfile::BT_470.rgb_matrix(),
            [0.0; 3],
        );
        assert_eq!((profile.u_min(), profile.u_max()), (0.0, 0.0));
        assert_eq!((profile.v_min(), profile.v_max()), (0.0, 0.0));
        let color = YUVColor::with_profile(0.5, 50.0, -50.0, profile);
        assert_eq!((color.u(), color.v()), (0.0, 0.0));
        assert!(color.is_in_bounds());
    }

    #[test]
    fn test_deserialized_profile_takes_magnitudes() {
        let mut json = serde_json::to_value(YuvProfile::BT_470).unwrap();
        json["u_max"] = serde_json::json!(-0.4);
        let profile: YuvProfile = serde_json::from_value(json).unwrap();
        assert_eq!((profile.u_min(), profile.u_max()), (-0.4, 0.4));
        let color = YUVColor::with_profile(0.5, 0.9, 0.0, profile);
        assert_eq!(color.u(), 0.4);
        assert!(color.is_in_bounds());

        let json = serde_json::to_string(&YuvProfile::BT_601).unwrap();
        assert_eq!(serde_json::from_str::<YuvProfile>(&json).unwrap(), YuvProfile::BT_601);
    }

    #[test]
    fn test_transform_layout() {
        let m = YuvProfile::BT_709.yuv_transform();
        assert_eq!(m[(0, 0)], 0.2126);
        assert_eq!(m[(1, 2)], 0.436);
        assert_eq!(YuvProfile::BT_601.rgb_transform()[(2, 1)], 2.01723);
        assert_eq!(YuvProfile::BT_601.offset_vector()[1], -0.5);
    }
}
