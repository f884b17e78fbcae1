//! This module contains the color models other than RGB, each in its own file. For convenience,
//! each main type is imported into this module's namespace directly.
pub mod ciexyzcolor;
pub mod cmykcolor;
pub mod hsbcolor;
pub mod hslcolor;
pub mod yuvcolor;

// for convenience, use this namespace for the color objects
pub use self::ciexyzcolor::CIEXYZColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hsbcolor::HSBColor;
pub use self::hslcolor::HSLColor;
pub use self::yuvcolor::YUVColor;
