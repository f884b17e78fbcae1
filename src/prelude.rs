//! This module brings the most common Vermilion functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait, the ubiquitous [`RGBColor`], the hex
//! [`ParseError`], [`YuvProfile`] and [`Illuminant`]. The other color models live in the
//! [`colors`](../colors/index.html) module and are not included.

pub use crate::bound::Bound;
pub use crate::color::{Color, RGBColor};
pub use crate::convert::hex::ParseError;
pub use crate::illuminants::Illuminant;
pub use crate::profiles::YuvProfile;
