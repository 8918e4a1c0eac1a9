//! Software 2D drawing core for tiny framebuffer-style graphics.
//!
//! Everything revolves around [`PixelSurface`], an owned RGBA buffer with
//! clipped drawing primitives and three blit variants:
//!
//! - [`PixelSurface`] — surface construction, `get`/`plot`,
//!   `clear`/`fill`/`rect`/`line`, `blit`/`blit_alpha`/`blit_tint`,
//!   `copy_within`
//! - [`Font`] / [`Glyph`] / [`Codepage`] — bitmap-atlas text rendering
//!   over tinted blits, with an embedded 8x8 ASCII font
//! - [`ImageDecoder`] / [`ImageEncoder`] — codec collaborator traits
//! - [`WindowBackend`] / [`WindowOptions`] / [`PostFx`] — windowing
//!   collaborator interface
//! - [`InputSource`] / [`Key`] / [`Mouse`] — input collaborator interface
//!
//! The drawing core itself is pure computation over memory: no I/O, no
//! platform calls, no threads. Hosts bring their own window, input, and
//! codec implementations behind the collaborator traits.
//!
//! # Example
//!
//! ```
//! use tinygfx::{Font, PixelSurface, rgb};
//!
//! let mut frame = PixelSurface::new(160, 120).unwrap();
//! frame.clear(rgb(0x20, 0x30, 0x40));
//! frame.rect(4, 4, 152, 112, rgb(0xc0, 0xc0, 0xc0));
//! Font::builtin().print(&mut frame, 8, 8, rgb(0xff, 0xff, 0xff), "Hello");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod blend;
mod codec;
mod color;
mod font;
mod input;
mod surface;
mod window;

pub use codec::{DecodeFailure, EncodeFailure, ImageDecoder, ImageEncoder};
pub use color::{Pixel, rgb, rgba};
pub use font::{Codepage, Font, FontError, Glyph};
pub use input::{InputSource, Key, Mouse, MouseButtons, scancode_for};
pub use surface::{AllocationFailure, PixelSurface, SurfaceSizeMismatch};
pub use window::{PostFx, Scale, WindowBackend, WindowOptions};

// Re-exports for hosts working with raw buffers.
pub use imgref::{Img, ImgRef, ImgRefMut, ImgVec};
pub use ::rgb;
