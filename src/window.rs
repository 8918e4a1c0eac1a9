//! Windowing collaborator interface.
//!
//! The drawing core never touches a display. A host supplies a
//! [`WindowBackend`] that owns the native window and knows how to push a
//! finished [`PixelSurface`] frame to it. The types here describe what
//! the core asks of that backend, nothing more.

use crate::surface::PixelSurface;

/// Integer upscale factor from surface pixels to window pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scale {
    /// 1:1 (no upscale).
    #[default]
    X1,
    /// Each surface pixel covers 2x2 window pixels.
    X2,
    /// Each surface pixel covers 3x3 window pixels.
    X3,
    /// Each surface pixel covers 4x4 window pixels.
    X4,
}

impl Scale {
    /// The numeric multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X3 => 3,
            Scale::X4 => 4,
        }
    }
}

/// How a backend should create and scale its window.
///
/// Defaults to a fixed-size, 1:1, non-retina window.
///
/// # Example
///
/// ```
/// use tinygfx::{Scale, WindowOptions};
///
/// let opts = WindowOptions::default()
///     .with_auto_resize(true)
///     .with_min_scale(Scale::X2);
/// assert_eq!(opts.min_scale.factor(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct WindowOptions {
    /// Let the surface grow and shrink with the window instead of
    /// letterboxing a fixed-size surface.
    pub auto_resize: bool,
    /// Smallest upscale the backend may present at; it may pick a larger
    /// one to fit the display.
    pub min_scale: Scale,
    /// Use the full native resolution on high-DPI displays instead of
    /// the scaled logical resolution.
    pub retina: bool,
}

impl WindowOptions {
    /// Builder-style setter for [`auto_resize`](Self::auto_resize).
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    /// Builder-style setter for [`min_scale`](Self::min_scale).
    pub fn with_min_scale(mut self, min_scale: Scale) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Builder-style setter for [`retina`](Self::retina).
    pub fn with_retina(mut self, retina: bool) -> Self {
        self.retina = retina;
        self
    }
}

/// Post-processing applied by the backend while presenting.
///
/// The default is a clean pass-through: no blur, no scanlines, contrast
/// `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct PostFx {
    /// Horizontal blur across the upscaled output.
    pub hblur: bool,
    /// Vertical blur across the upscaled output.
    pub vblur: bool,
    /// CRT-style scanline darkening, 0.0 (off) to 1.0 (full).
    pub scanlines: f32,
    /// Output contrast multiplier; 1.0 is neutral.
    pub contrast: f32,
}

impl Default for PostFx {
    fn default() -> Self {
        Self {
            hblur: false,
            vblur: false,
            scanlines: 0.0,
            contrast: 1.0,
        }
    }
}

impl PostFx {
    /// Builder-style setter for [`hblur`](Self::hblur).
    pub fn with_hblur(mut self, hblur: bool) -> Self {
        self.hblur = hblur;
        self
    }

    /// Builder-style setter for [`vblur`](Self::vblur).
    pub fn with_vblur(mut self, vblur: bool) -> Self {
        self.vblur = vblur;
        self
    }

    /// Builder-style setter for [`scanlines`](Self::scanlines).
    pub fn with_scanlines(mut self, scanlines: f32) -> Self {
        self.scanlines = scanlines;
        self
    }

    /// Builder-style setter for [`contrast`](Self::contrast).
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }
}

/// A native window that can display finished frames.
///
/// Implementations own the platform window and its event pump. The
/// drawing core only ever hands them a completed surface; how it reaches
/// the screen (and at what scale, per [`WindowOptions`]) is the
/// backend's business.
pub trait WindowBackend {
    /// Error type for presentation failures.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Whether the user has asked the window to close. Once true it
    /// stays true.
    fn closed(&self) -> bool;

    /// Display `frame` and pump pending window events.
    fn present(&mut self, frame: &PixelSurface) -> Result<(), Self::Error>;

    /// Replace the presentation post-processing settings.
    fn set_post_fx(&mut self, fx: PostFx);
}
