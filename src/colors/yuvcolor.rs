//! This module implements YUV, the luma-chroma encoding of analog and digital television. Y is the
//! luma, a weighted sum of the gamma-encoded RGB channels, and U and V are scaled differences of
//! blue and red from that luma. The weights and scales come from a [`YuvProfile`], and a YUV color
//! carries the profile it was made with: the same triple decodes to different RGB values under
//! different profiles, and the valid range of U and V differs between them.
//!
//! [`YuvProfile`]: ../../profiles/struct.YuvProfile.html

use serde_derive::{Deserialize, Serialize};

use crate::bound::{saturate, Bound};
use crate::color::{Color, RGBColor};
use crate::convert;
use crate::profiles::YuvProfile;

/// A YUV color. Y ranges from 0 to 1, while U and V range between plus and minus the maximums
/// given by the color's profile.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::YUVColor;
/// let pal = YUVColor::new(0.5, 0.9, -0.9);
/// assert_eq!((pal.u(), pal.v()), (0.436, -0.615));
///
/// let digital = YUVColor::with_profile(0.5, 0.9, -0.9, YuvProfile::BT_601);
/// assert_eq!((digital.u(), digital.v()), (0.5, -0.5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawYUV")]
pub struct YUVColor {
    y: f64,
    u: f64,
    v: f64,
    profile: YuvProfile,
}

impl YUVColor {
    /// Builds a YUV color with the BT.470 profile, saturating each component into range.
    pub fn new(y: f64, u: f64, v: f64) -> YUVColor {
        YUVColor::with_profile(y, u, v, YuvProfile::BT_470)
    }

    /// Builds a YUV color with the given profile, saturating U and V against its maximums.
    pub fn with_profile(y: f64, u: f64, v: f64, profile: YuvProfile) -> YUVColor {
        YUVColor {
            y: saturate(y, 0.0, 1.0),
            u: saturate(u, profile.u_min(), profile.u_max()),
            v: saturate(v, profile.v_min(), profile.v_max()),
            profile,
        }
    }

    /// The luma.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The blue-difference chroma.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// The red-difference chroma.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// The profile this color is encoded with.
    pub fn profile(&self) -> YuvProfile {
        self.profile
    }

    /// Returns a copy with a new luma.
    pub fn with_y(self, y: f64) -> YUVColor {
        YUVColor::with_profile(y, self.u, self.v, self.profile)
    }

    /// Returns a copy with a new U, saturated against this color's profile.
    pub fn with_u(self, u: f64) -> YUVColor {
        YUVColor::with_profile(self.y, u, self.v, self.profile)
    }

    /// Returns a copy with a new V, saturated against this color's profile.
    pub fn with_v(self, v: f64) -> YUVColor {
        YUVColor::with_profile(self.y, self.u, v, self.profile)
    }
}

impl Color for YUVColor {
    /// Encodes with BT.470. Use [`convert::rgb::to_yuv`] to pick another profile.
    ///
    /// [`convert::rgb::to_yuv`]: ../../convert/rgb/fn.to_yuv.html
    fn from_rgb(rgb: RGBColor) -> YUVColor {
        convert::rgb::to_yuv(&rgb, YuvProfile::BT_470)
    }

    /// Decodes with this color's own profile.
    fn to_rgb(&self) -> RGBColor {
        convert::yuv::to_rgb(self)
    }
}

impl Bound for YUVColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![
            (0., 1.),
            (self.profile.u_min(), self.profile.u_max()),
            (self.profile.v_min(), self.profile.v_max()),
        ]
    }

    fn components(&self) -> Vec<f64> {
        vec![self.y, self.u, self.v]
    }
}

#[derive(Deserialize)]
struct RawYUV {
    y: f64,
    u: f64,
    v: f64,
    #[serde(default)]
    profile: YuvProfile,
}

impl From<RawYUV> for YUVColor {
    fn from(raw: RawYUV) -> YUVColor {
        YUVColor::with_profile(raw.y, raw.u, raw.v, raw.profile)
    }
}
