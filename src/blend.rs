//! Integer source-over blend arithmetic.
//!
//! All compositing in this crate funnels through these helpers so the
//! rounding behavior is fixed in one place: round-to-nearest, computed as
//! `(x + 127) / 255`. With coverage 255 the source byte is reproduced
//! exactly, with coverage 0 the destination byte is untouched.

use crate::color::Pixel;

/// `(a * b) / 255`, rounded to nearest.
#[inline]
pub(crate) fn mul_u8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

/// Blend one channel: `(src * a + dst * (255 - a)) / 255`, rounded to nearest.
#[inline]
pub(crate) fn blend_channel(src: u8, dst: u8, a: u8) -> u8 {
    let a = a as u16;
    ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8
}

/// Source-over blend of a whole pixel, alpha channel included, with
/// coverage `a` in 0..=255.
#[inline]
pub(crate) fn blend_pixel(src: Pixel, dst: Pixel, a: u8) -> Pixel {
    Pixel {
        r: blend_channel(src.r, dst.r, a),
        g: blend_channel(src.g, dst.g, a),
        b: blend_channel(src.b, dst.b, a),
        a: blend_channel(src.a, dst.a, a),
    }
}

/// Quantize a fade multiplier to 0..=255 coverage.
///
/// Values outside `[0, 1]` are clamped; the wrapped operations document
/// this as their defined behavior for out-of-range fades.
#[inline]
pub(crate) fn quantize_fade(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
