//! Pixel type and color helpers.
//!
//! A [`Pixel`] is an `rgb::Rgba<u8>`: four unsigned 8-bit channels stored
//! in R, G, B, A byte order (`repr(C)`). That order is fixed and is the
//! interchange layout for any code that reads a surface's raw buffer.
//! Channel values are 0–255 with no implicit premultiplication.

use rgb::Rgba;

/// One RGBA pixel, 0–255 per channel, straight (non-premultiplied) alpha.
pub type Pixel = Rgba<u8>;

/// An opaque color (alpha = 255).
///
/// # Example
///
/// ```
/// let c = tinygfx::rgb(0x80, 0x90, 0xa0);
/// assert_eq!(c.a, 255);
/// ```
pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
    Pixel { r, g, b, a: 255 }
}

/// A color with an explicit alpha value.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Pixel {
    Pixel { r, g, b, a }
}
