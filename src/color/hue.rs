//! Floating-point HSV conversion
//!
//! The sweep scene advances hue in steps far smaller than the 1/256 resolution
//! of `smart_leds::hsv`, so hue is kept as `f32` on the unit circle here.

use libm::floorf;

use crate::color::Rgb;

/// Wrap a value onto `[0, 1)`
///
/// `1.0` maps to `0.0`, negative values wrap from the top.
pub fn wrap_unit(value: f32) -> f32 {
    let wrapped = value - floorf(value);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert HSV to RGB
///
/// All components are in `[0, 1]`; hue is wrapped first. The hue circle is
/// split into six 60° sectors and each channel is continuous within a sector.
/// Channels are scaled to `0..=255` with truncation.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let scaled = wrap_unit(hue) * 6.0;
    let sector = floorf(scaled);
    let fraction = scaled - sector;

    let p = val * (1.0 - sat);
    let q = val * (1.0 - fraction * sat);
    let t = val * (1.0 - (1.0 - fraction) * sat);

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb {
        r: unit_to_u8(r),
        g: unit_to_u8(g),
        b: unit_to_u8(b),
    }
}

/// Fully saturated, full value color for a hue
#[inline]
pub fn hue_to_rgb(hue: f32) -> Rgb {
    hsv_to_rgb(hue, 1.0, 1.0)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    // float to int casts saturate, so out-of-range input clamps to 0..=255
    (value * 255.0) as u8
}
