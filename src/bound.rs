//! This module describes the Bound trait, which exposes the range each component of a color model
//! may occupy, along with the saturating clamp every constructor in this crate applies. Colors here
//! never reject out-of-range input: a red of 300 simply becomes 255, and a hue of -20 becomes 0.

use num::Float;
use tracing::trace;

/// Describes a color whose components live inside explicit bounds. Most models have fixed bounds,
/// but some depend on the value itself: a CIE XYZ color is bounded by its reference white, and a
/// YUV color by the maximum chroma of its profile. For that reason the bounds are read from an
/// instance rather than from the type.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// # use vermilion::colors::CMYKColor;
/// let cmyk = CMYKColor::new(1.4, -0.2, 0.5, 0.25);
/// assert!(cmyk.is_in_bounds());
/// assert_eq!(cmyk.components(), vec![1.0, 0.0, 0.5, 0.25]);
/// ```
pub trait Bound {
    /// Returns `(min, max)` for every component, in the order the model names them.
    fn bounds(&self) -> Vec<(f64, f64)>;
    /// Returns every component as an `f64`, in the same order as [`Bound::bounds`].
    fn components(&self) -> Vec<f64>;
    /// Checks that every component lies inside its bounds. Always true for values built by this
    /// crate.
    fn is_in_bounds(&self) -> bool {
        self.components()
            .iter()
            .zip(self.bounds())
            .all(|(&c, (min, max))| c >= min && c <= max)
    }
}

/// Saturates `value` into `[min, max]`. NaN has no nearest bound, so it maps to `min`.
pub(crate) fn saturate<T: Float>(value: T, min: T, max: T) -> T {
    if value.is_nan() || value < min {
        trace!("saturating component to its minimum");
        min
    } else if value > max {
        trace!("saturating component to its maximum");
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_inside_range() {
        assert_eq!(saturate(0.25, 0.0, 1.0), 0.25);
        assert_eq!(saturate(0.0, 0.0, 1.0), 0.0);
        assert_eq!(saturate(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_saturate_outside_range() {
        assert_eq!(saturate(-3.0, 0.0, 360.0), 0.0);
        assert_eq!(saturate(361.0, 0.0, 360.0), 360.0);
        assert_eq!(saturate(-0.9, -0.436, 0.436), -0.436);
        assert_eq!(saturate(f64::INFINITY, 0.0, 255.0), 255.0);
        assert_eq!(saturate(f64::NEG_INFINITY, 0.0, 255.0), 0.0);
    }

    #[test]
    fn test_saturate_nan() {
        assert_eq!(saturate(f64::NAN, -0.5, 0.5), -0.5);
    }
}
