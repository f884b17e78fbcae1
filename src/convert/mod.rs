//! Conversions written as plain functions, one module per source model. Each module has two
//! layers: raw helpers that take bare components and return bare components of the target model
//! (for example [`rgb::hsb_components`]), and typed functions that take and return the color
//! structs (for example [`hsb::to_cmyk`]). Any conversion that does not start or end at RGB is
//! computed by going to RGB first.
//!
//! Every path that produces an 8-bit channel goes through [`round_channel`], so the same
//! fractional value always lands on the same integer no matter which model it came from.
//!
//! [`rgb::hsb_components`]: rgb/fn.hsb_components.html
//! [`hsb::to_cmyk`]: hsb/fn.to_cmyk.html

use crate::bound::saturate;

pub mod ciexyz;
pub mod cmyk;
pub mod hex;
pub mod hsb;
pub mod hsl;
pub mod rgb;
pub mod yuv;

/// Turns a channel value already scaled to 0-255 into an 8-bit channel. Halves round away from
/// zero, and anything outside of `[0, 255]` (NaN included) saturates.
///
/// # Example
/// ```
/// # use vermilion::round_channel;
/// assert_eq!(round_channel(127.5), 128);
/// assert_eq!(round_channel(127.49), 127);
/// assert_eq!(round_channel(-3.0), 0);
/// assert_eq!(round_channel(301.2), 255);
/// ```
pub fn round_channel(value: f64) -> u8 {
    saturate(value.round(), 0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_channel_halves() {
        assert_eq!(round_channel(0.5), 1);
        assert_eq!(round_channel(1.5), 2);
        assert_eq!(round_channel(2.5), 3);
        assert_eq!(round_channel(254.5), 255);
        assert_eq!(round_channel(-0.5), 0);
    }

    #[test]
    fn test_round_channel_saturation() {
        assert_eq!(round_channel(255.49), 255);
        assert_eq!(round_channel(1e12), 255);
        assert_eq!(round_channel(f64::NAN), 0);
        assert_eq!(round_channel(f64::NEG_INFINITY), 0);
    }
}
