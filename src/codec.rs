//! Image codec collaborator traits.
//!
//! The surface core does not read or write any on-disk image format.
//! Instead, loading and saving go through these two traits, so a host can
//! plug in whichever codec crate fits its targets. Both operate on whole
//! in-memory byte buffers; streaming is out of scope for this crate.

use alloc::vec::Vec;
use core::fmt;

use crate::surface::PixelSurface;

/// Decodes an encoded image into a [`PixelSurface`].
///
/// Implementations must produce straight (non-premultiplied) RGBA and
/// fill the alpha channel with 255 for formats without one.
pub trait ImageDecoder: Clone + Send + Sync {
    /// Error type for decode failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Decode `bytes` into a new surface.
    fn decode(&self, bytes: &[u8]) -> Result<PixelSurface, Self::Error>;
}

/// Encodes a [`PixelSurface`] into an image byte stream.
pub trait ImageEncoder: Clone + Send + Sync {
    /// Error type for encode failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Encode `surface` into a fresh byte buffer.
    fn encode(&self, surface: &PixelSurface) -> Result<Vec<u8>, Self::Error>;
}

/// A decode rejected its input.
///
/// Ready-made error type for decoder implementations that do not need
/// richer diagnostics than a static reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeFailure {
    /// What the decoder objected to.
    pub reason: &'static str,
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image decode failed: {}", self.reason)
    }
}

impl core::error::Error for DecodeFailure {}

/// An encode could not represent its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeFailure {
    /// What the encoder objected to.
    pub reason: &'static str,
}

impl fmt::Display for EncodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image encode failed: {}", self.reason)
    }
}

impl core::error::Error for EncodeFailure {}
