mod hue;

pub use hue::{hsv_to_rgb, hue_to_rgb, wrap_unit};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Pure red, one of the three chase colors
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// Pure green, one of the three chase colors
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
/// Pure blue, one of the three chase colors
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
