//! Property-based tests for conversions between color models
//!
//! Every model here can represent every 8-bit RGB color, so a conversion out of RGB and back must
//! land on the same channels. Construction must also keep any input in range.

use proptest::prelude::*;
use vermilion::colors::{CIEXYZColor, CMYKColor, HSBColor, HSLColor, YUVColor};
use vermilion::convert;
use vermilion::prelude::*;

prop_compose! {
    fn rgb_strategy()(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) -> RGBColor {
        RGBColor::new(r, g, b)
    }
}

// Mostly ordinary values, with the edges construction has to deal with mixed in
fn wild_component() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1000.0..1000.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(1.0),
        Just(360.0),
    ]
}

proptest! {
    #[test]
    fn test_hsb_roundtrip(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.convert::<HSBColor>().to_rgb(), rgb);
    }

    #[test]
    fn test_hsl_roundtrip(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.convert::<HSLColor>().to_rgb(), rgb);
    }

    #[test]
    fn test_cmyk_roundtrip(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.convert::<CMYKColor>().to_rgb(), rgb);
    }

    #[test]
    fn test_cie_xyz_roundtrip(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.convert::<CIEXYZColor>().to_rgb(), rgb);
    }

    #[test]
    fn test_yuv_roundtrip(rgb in rgb_strategy()) {
        prop_assert_eq!(rgb.convert::<YUVColor>().to_rgb(), rgb);
        let hdtv = convert::rgb::to_yuv(&rgb, YuvProfile::BT_709);
        prop_assert_eq!(hdtv.to_rgb(), rgb);
    }

    #[test]
    fn test_hex_roundtrip(rgb in rgb_strategy()) {
        let hex = rgb.to_hex();
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(convert::hex::to_rgb(&hex), Ok(rgb));
        prop_assert_eq!(convert::hex::to_rgb(&hex.to_uppercase()), Ok(rgb));
    }

    #[test]
    fn test_construction_saturates(
        a in wild_component(),
        b in wild_component(),
        c in wild_component(),
        d in wild_component()
    ) {
        prop_assert!(RGBColor::new(a, b, c).is_in_bounds());
        prop_assert!(HSBColor::new(a, b, c).is_in_bounds());
        prop_assert!(HSLColor::new(a, b, c).is_in_bounds());
        prop_assert!(CMYKColor::new(a, b, c, d).is_in_bounds());
        prop_assert!(CIEXYZColor::new(a, b, c).is_in_bounds());
        prop_assert!(YUVColor::new(a, b, c).is_in_bounds());
        prop_assert!(YUVColor::with_profile(a, b, c, YuvProfile::BT_601).is_in_bounds());
    }

    #[test]
    fn test_setters_saturate(rgb in rgb_strategy(), value in wild_component()) {
        let hsl = rgb.convert::<HSLColor>().with_h(value).with_s(value).with_l(value);
        prop_assert!(hsl.is_in_bounds());
        let cmyk = rgb.convert::<CMYKColor>().with_k(value);
        prop_assert!(cmyk.is_in_bounds());
    }

    #[test]
    fn test_parse_never_panics(s in "\\PC*") {
        let _ = s.parse::<RGBColor>();
    }
}
