//! This file defines the [`Color`] trait and the RGB color every other model converts through.
//! RGB is the common ground here: each model in this crate is defined as some transformation of
//! 8-bit sRGB, so converting HSL to CMYK means converting HSL to RGB and then RGB to CMYK. The
//! trait captures exactly that, which is why it only asks for two functions.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::convert;
use crate::convert::hex::ParseError;
use crate::convert::round_channel;

/// A trait that includes any color representation that can be converted to and from 8-bit RGB.
/// Implementing the two required functions gives a color every other conversion for free through
/// [`Color::convert`].
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::{HSLColor, HSBColor};
/// let hsl = HSLColor::new(120.0, 1.0, 0.25);
/// let hsb: HSBColor = hsl.convert();
/// assert_eq!(hsb.to_hex(), "#008000");
/// ```
pub trait Color: Sized {
    /// Builds this color from an RGB color.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this color into RGB, rounding each channel to an integer.
    fn to_rgb(&self) -> RGBColor;

    /// Converts this color into any other color by way of RGB.
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }

    /// Formats this color as a lowercase `#rrggbb` hex string.
    fn to_hex(&self) -> String {
        convert::rgb::to_hex(&self.to_rgb())
    }
}

/// A color with three 8-bit channels in the sRGB space. Channels are integers between 0 and 255:
/// anything outside of that range saturates to the nearest end when the color is built.
///
/// `Display` writes the color as a lowercase hex string and `FromStr` reads one back, accepting
/// both the `#rrggbb` and the shorthand `#rgb` forms.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// let rgb = RGBColor::new(300, -20, 30);
/// assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 0, 30));
/// assert_eq!(rgb.to_string(), "#ff001e");
/// assert_eq!("#f0a".parse::<RGBColor>().unwrap(), RGBColor::new(255, 0, 170));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRGB")]
pub struct RGBColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RGBColor {
    /// Builds an RGB color from any numeric channels, saturating each into `[0, 255]`. Fractional
    /// channels are rounded with [`round_channel`].
    pub fn new<T: num::NumCast>(r: T, g: T, b: T) -> RGBColor {
        RGBColor::from_channels(cast_channel(r), cast_channel(g), cast_channel(b))
    }

    /// Builds an RGB color from channels already scaled to 0-255 but not yet rounded.
    pub fn from_channels(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor {
            r: round_channel(r),
            g: round_channel(g),
            b: round_channel(b),
        }
    }

    /// The red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// The green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Returns a copy with a new red channel, saturated into range.
    pub fn with_r<T: num::NumCast>(self, r: T) -> RGBColor {
        RGBColor::new(cast_channel(r), f64::from(self.g), f64::from(self.b))
    }

    /// Returns a copy with a new green channel, saturated into range.
    pub fn with_g<T: num::NumCast>(self, g: T) -> RGBColor {
        RGBColor::new(f64::from(self.r), cast_channel(g), f64::from(self.b))
    }

    /// Returns a copy with a new blue channel, saturated into range.
    pub fn with_b<T: num::NumCast>(self, b: T) -> RGBColor {
        RGBColor::new(f64::from(self.r), f64::from(self.g), cast_channel(b))
    }

    /// The channels normalized to `[0, 1]`.
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

// anything that can't be represented as an f64 is treated like NaN and saturates to 0
fn cast_channel<T: num::NumCast>(channel: T) -> f64 {
    num::cast(channel).unwrap_or(f64::NAN)
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }

    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(channels: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: channels.0,
            g: channels.1,
            b: channels.2,
        }
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from(channels: [u8; 3]) -> RGBColor {
        RGBColor {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", convert::rgb::hex_string(self.r, self.g, self.b))
    }
}

impl FromStr for RGBColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RGBColor, ParseError> {
        convert::hex::to_rgb(s)
    }
}

impl Bound for RGBColor {
    fn bounds(&self) -> Vec<(f64, f64)> {
        vec![(0., 255.); 3]
    }

    fn components(&self) -> Vec<f64> {
        vec![self.r.into(), self.g.into(), self.b.into()]
    }
}

// serde goes through this so that out-of-range input saturates instead of failing
#[derive(Deserialize)]
struct RawRGB {
    r: f64,
    g: f64,
    b: f64,
}

impl From<RawRGB> for RGBColor {
    fn from(raw: RawRGB) -> RGBColor {
        RGBColor::from_channels(raw.r, raw.g, raw.b)
    }
}
